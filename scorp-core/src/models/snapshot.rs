use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClientRecord, ContractorRecord, DeductionRecord, EmployeeRecord, ExpenseRecord};

/// The real (persisted) financial state handed to the engine on each call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    pub clients: Vec<ClientRecord>,
    pub expenses: Vec<ExpenseRecord>,
    pub employees: Vec<EmployeeRecord>,
    pub contractors: Vec<ContractorRecord>,
    pub deductions: BTreeMap<String, DeductionRecord>,
}

impl FinancialSnapshot {
    pub fn monthly_revenue(&self) -> Decimal {
        self.clients.iter().map(ClientRecord::monthly_revenue).sum()
    }

    pub fn monthly_recurring_expenses(&self) -> Decimal {
        self.expenses.iter().map(ExpenseRecord::monthly_cost).sum()
    }

    pub fn monthly_contractor_pay(&self) -> Decimal {
        self.contractors
            .iter()
            .map(ContractorRecord::monthly_pay)
            .sum()
    }

    pub fn annual_salary(&self) -> Decimal {
        self.employees.iter().map(|e| e.salary).sum()
    }
}
