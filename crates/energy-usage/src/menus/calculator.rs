use crate::console::Console;
use anyhow::Result;
use crossterm::style::Stylize;
use energy_usage_monitor::prelude::*;
use energy_usage_monitor::ENERGY_SAVING_TIPS;
use std::io::{BufRead, Write};
use tracing::debug;

pub const NO_APPLIANCES_MESSAGE: &str = "No appliances registered.";
pub const NO_APPLIANCES_TO_EVALUATE: &str = "No appliances registered to evaluate.";
pub const LIMIT_EXCEEDED_MESSAGE: &str = "** The monthly consumption limit has been exceeded **";
pub const SUSTAINABLE_MESSAGE: &str = "Monthly energy consumption is sustainable.";

const MENU: &str = "
======= Main Menu =======
1. Add appliances
2. Show consumption of all appliances
3. Show energy-saving tips
4. Show appliance with the highest consumption
5. Show appliance with the lowest consumption
6. Exit
Select an option: ";

/// Free-form appliance list checked against a monthly budget.
pub struct CalculatorSession {
    calculator: Calculator,
    appliances: Vec<Appliance>,
    budget_kwh: f64,
}

impl CalculatorSession {
    pub fn new(budget_kwh: f64) -> Self {
        Self {
            calculator: Calculator::new(),
            appliances: Vec::new(),
            budget_kwh,
        }
    }

    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            let Some(choice) = console.prompt_line(MENU)? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    if !self.add_appliances(console)? {
                        return Ok(());
                    }
                }
                "2" => self.show_all(console.out())?,
                "3" => show_tips(console.out())?,
                "4" => self.show_extreme(console.out(), Extreme::Highest)?,
                "5" => self.show_extreme(console.out(), Extreme::Lowest)?,
                "6" => {
                    writeln!(console.out(), "\nThank you for using the program. See you soon!")?;
                    return Ok(());
                }
                _ => writeln!(console.out(), "Invalid option. Try again.")?,
            }
        }
    }

    /// Returns `false` when input ran out part-way.
    fn add_appliances<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<bool> {
        let Some(count) =
            console.prompt_count("\nEnter the number of appliances you want to add: ")?
        else {
            return Ok(false);
        };

        for i in 1..=count {
            let Some(name) =
                console.prompt_line(&format!("\nEnter the name of appliance {}: ", i))?
            else {
                return Ok(false);
            };
            let Some(daily_watts) = console.prompt_positive("Daily consumption in Watts: ")? else {
                return Ok(false);
            };

            debug!(name = %name, daily_watts, "appliance added");
            self.appliances.push(Appliance::new(name, daily_watts));
            writeln!(console.out(), "Appliance added successfully.")?;
        }

        Ok(true)
    }

    fn show_all<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.appliances.is_empty() {
            writeln!(out, "{}", NO_APPLIANCES_MESSAGE)?;
            return Ok(());
        }

        for appliance in &self.appliances {
            self.show_consumption(out, appliance)?;
        }

        let total = self.calculator.total_monthly_kwh(&self.appliances);
        writeln!(
            out,
            "Total monthly consumption of all appliances: {:.2} kWh",
            total
        )?;

        match self.calculator.budget_status(total, self.budget_kwh) {
            BudgetStatus::Exceeded { over_by_kwh } => {
                debug!(total, budget = self.budget_kwh, over_by_kwh, "budget exceeded");
                writeln!(out, "\n{}", LIMIT_EXCEEDED_MESSAGE.red().bold())?;
                writeln!(
                    out,
                    "Over the {:.2} kWh limit by {:.2} kWh.",
                    self.budget_kwh, over_by_kwh
                )?;
                show_tips(out)?;
            }
            BudgetStatus::Sustainable => {
                writeln!(out, "\n{}", SUSTAINABLE_MESSAGE.green())?;
            }
        }

        Ok(())
    }

    fn show_extreme<W: Write>(&self, out: &mut W, extreme: Extreme) -> Result<()> {
        let found = match extreme {
            Extreme::Highest => self.calculator.max_monthly_appliance(&self.appliances),
            Extreme::Lowest => self.calculator.min_monthly_appliance(&self.appliances),
        };

        match found {
            Some(appliance) => {
                writeln!(out, "\nAppliance with the {} monthly consumption:", extreme.label())?;
                self.show_consumption(out, appliance)
            }
            None => {
                writeln!(out, "{}", NO_APPLIANCES_TO_EVALUATE)?;
                Ok(())
            }
        }
    }

    fn show_consumption<W: Write>(&self, out: &mut W, appliance: &Appliance) -> Result<()> {
        writeln!(out, "Appliance: {}", appliance.name())?;
        for (label, watts) in self.calculator.breakdown(appliance).horizons() {
            writeln!(
                out,
                "{} consumption: {:.2} Watts ({:.2} kWh)",
                label,
                watts,
                self.calculator.watts_to_kwh(watts)
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Extreme {
    Highest,
    Lowest,
}

impl Extreme {
    fn label(&self) -> &'static str {
        match self {
            Extreme::Highest => "highest",
            Extreme::Lowest => "lowest",
        }
    }
}

fn show_tips<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "Tips to reduce energy consumption:".yellow())?;
    for tip in ENERGY_SAVING_TIPS {
        writeln!(out, "- {}", tip)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Asks for the monthly budget unless one was supplied, then runs the menu.
pub fn run_calculator<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    budget_kwh: Option<f64>,
) -> Result<()> {
    let budget_kwh = match budget_kwh {
        Some(budget) => budget,
        None => match console.prompt_positive("Enter the monthly consumption limit in kWh: ")? {
            Some(budget) => budget,
            None => return Ok(()),
        },
    };

    let mut session = CalculatorSession::new(budget_kwh);
    session.run(console)?;
    debug!(
        appliances = session.appliances().len(),
        "calculator session ended"
    );
    Ok(())
}
