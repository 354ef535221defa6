//! Static sample data backing the dashboard page. Plain constants owned by the
//! presentation shell; nothing here feeds the upload workflow.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Clone, Copy, Debug)]
pub struct SalesMonth {
    pub month: &'static str,
    pub value: u16,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ActivityRow {
    pub invoice: &'static str,
    pub amount: &'static str,
    pub status: InvoiceStatus,
    pub date: &'static str,
}

/// Summary stat with a progress share rendered as a thin gauge.
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub progress: u16,
}

pub const METRICS: [Metric; 3] = [
    Metric {
        title: "Total Sales",
        value: "R45,231.89",
        change: "+20.1%",
        trend: Trend::Up,
    },
    Metric {
        title: "Total Spent",
        value: "R12,234.50",
        change: "+12.5%",
        trend: Trend::Up,
    },
    Metric {
        title: "Total Orders",
        value: "1,234",
        change: "-4.3%",
        trend: Trend::Down,
    },
];

pub const SALES: [SalesMonth; 6] = [
    SalesMonth {
        month: "Jan",
        value: 65,
    },
    SalesMonth {
        month: "Feb",
        value: 78,
    },
    SalesMonth {
        month: "Mar",
        value: 52,
    },
    SalesMonth {
        month: "Apr",
        value: 85,
    },
    SalesMonth {
        month: "May",
        value: 72,
    },
    SalesMonth {
        month: "Jun",
        value: 90,
    },
];

pub const RECENT_ACTIVITY: [ActivityRow; 4] = [
    ActivityRow {
        invoice: "INV-001",
        amount: "R1,234.56",
        status: InvoiceStatus::Paid,
        date: "2024-01-15",
    },
    ActivityRow {
        invoice: "INV-002",
        amount: "R987.65",
        status: InvoiceStatus::Pending,
        date: "2024-01-14",
    },
    ActivityRow {
        invoice: "INV-003",
        amount: "R2,345.67",
        status: InvoiceStatus::Paid,
        date: "2024-01-13",
    },
    ActivityRow {
        invoice: "INV-004",
        amount: "R567.89",
        status: InvoiceStatus::Overdue,
        date: "2024-01-12",
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        title: "Pending Invoices",
        value: "23",
        progress: 65,
    },
    Stat {
        title: "Paid This Month",
        value: "156",
        progress: 85,
    },
    Stat {
        title: "Overdue",
        value: "8",
        progress: 25,
    },
    Stat {
        title: "Total Clients",
        value: "342",
        progress: 95,
    },
];
