#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Env};

/// Payroll example contract demonstrating a tagged variant over role kinds.
///
/// Each role variant carries its own pay figure and its own cost rule:
/// a salaried employee costs their monthly salary regardless of hours
/// worked, an hourly employee costs their rate times the hours worked.
/// All amounts are in cents.
#[contract]
pub struct Payroll;

/// Employee role, carrying the pay figure the cost rule operates on.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// Monthly salary in cents
    Salaried(i128),
    /// Hourly rate in cents
    Hourly(i128),
}

#[contractimpl]
impl Payroll {
    /// Compute the monthly cost of an employee.
    ///
    /// `hours_worked` only matters for hourly roles; salaried roles cost
    /// their salary whether they worked or not.
    pub fn monthly_cost(_env: Env, role: Role, hours_worked: u32) -> i128 {
        match role {
            Role::Salaried(salary) => salary,
            Role::Hourly(rate) => rate * hours_worked as i128,
        }
    }
}
