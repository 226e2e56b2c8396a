mod bank_allocation;
mod client;
mod contractor;
mod deduction;
mod employee;
mod expense;
mod overlay;
mod snapshot;
mod trip;

pub use bank_allocation::BankAllocation;
pub use client::{ClientPatch, ClientRecord, ClientStatus};
pub use contractor::{ContractorPatch, ContractorPay, ContractorRecord, WEEKS_PER_MONTH};
pub use deduction::{BUSINESS_MEALS, DeductionRecord, TRAVEL_MEALS};
pub use employee::{EmployeePatch, EmployeeRecord};
pub use expense::{ExpensePatch, ExpenseRecord};
pub use overlay::{EntityDiff, EntityId, OverlayEntity, ScenarioOverlay};
pub use snapshot::FinancialSnapshot;
pub use trip::TripExpenseTotals;
