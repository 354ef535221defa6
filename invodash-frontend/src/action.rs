use crate::task::Task;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Quit,
    Task(Task),
}
