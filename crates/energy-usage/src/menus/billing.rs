use crate::console::Console;
use anyhow::Result;
use crossterm::style::Stylize;
use energy_usage_monitor::prelude::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

pub const INVALID_SELECTION_MESSAGE: &str = "Invalid option. Try again.";

const BANNER: &str = "=========================================
   HOUSEHOLD ENERGY CONSUMPTION MANAGER
=========================================";

const MENU: &str = "
=====================
         MENU
=====================
1. Add appliances
2. Show total consumption
3. Save report to file
4. Exit
Select an option: ";

/// Catalog selections priced through a usage ledger.
pub struct BillingSession {
    catalog: Catalog,
    ledger: UsageLedger,
    report_path: PathBuf,
}

impl BillingSession {
    pub fn new(catalog: Catalog, ledger: UsageLedger, report_path: PathBuf) -> Self {
        Self {
            catalog,
            ledger,
            report_path,
        }
    }

    pub fn ledger(&self) -> &UsageLedger {
        &self.ledger
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        writeln!(console.out(), "{}", BANNER.bold())?;
        writeln!(console.out(), "\nPlease register.")?;
        let Some(user_name) = console.prompt_line("Name: ")? else {
            return Ok(());
        };
        let Some(contact) = console.prompt_line("Contact number: ")? else {
            return Ok(());
        };
        writeln!(console.out(), "\nWelcome, {} ({}).", user_name, contact)?;

        loop {
            let Some(choice) = console.prompt_line(MENU)? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    if !self.select_appliances(console)? {
                        return Ok(());
                    }
                }
                "2" => {
                    let report = self.ledger.build_report()?;
                    write_report(&report, ReportSink::Console(console.out()))?;
                }
                "3" => self.save_report(console.out())?,
                "4" => {
                    writeln!(console.out(), "Exiting the program... See you soon!")?;
                    return Ok(());
                }
                _ => writeln!(console.out(), "{}", INVALID_SELECTION_MESSAGE)?,
            }
        }
    }

    fn show_catalog<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n--- Appliance Selection ---")?;
        for (number, appliance) in self.catalog.entries() {
            writeln!(
                out,
                "{}. {:<24} ({} W/min)",
                number,
                appliance.name(),
                appliance.watts_per_minute()
            )?;
        }
        Ok(())
    }

    /// Reads one line of catalog numbers and records usage for each valid
    /// one. Returns `false` when input ran out part-way.
    fn select_appliances<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        self.show_catalog(console.out())?;
        let Some(line) =
            console.prompt_line("Select the appliances you want to add (0 to finish): ")?
        else {
            return Ok(false);
        };

        for token in line.split_whitespace() {
            let Some(number) = parse_selection(token) else {
                break;
            };
            if number == Selection::Number(0) {
                break;
            }

            let selected = number
                .index()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| self.catalog.get(index))
                .cloned();
            let Some(appliance) = selected else {
                writeln!(console.out(), "{}", INVALID_SELECTION_MESSAGE)?;
                continue;
            };

            let Some(minutes) = console.prompt_non_negative(&format!(
                "Enter the minutes of daily use for {}: ",
                appliance.name()
            ))?
            else {
                return Ok(false);
            };
            let Some(days) = console.prompt_whole_number(&format!(
                "Enter the days of use per month for {}: ",
                appliance.name()
            ))?
            else {
                return Ok(false);
            };

            let summary = appliance.render(minutes, days, self.ledger.tariff())?;
            self.ledger.add_usage(appliance, minutes, days);
            write!(console.out(), "{}", summary)?;
        }

        Ok(true)
    }

    fn save_report<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.ledger.build_report()?;
        match write_report(&report, ReportSink::File(self.report_path.clone())) {
            Ok(()) => writeln!(
                out,
                "Report saved successfully to {}.",
                self.report_path.display()
            )?,
            Err(e) => {
                warn!(error = %e, "could not save report");
                writeln!(out, "{} {:#}", "Warning:".yellow(), e)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Selection {
    Number(i64),
    /// All digits but too large for `i64`.
    Overflow,
}

impl Selection {
    fn index(self) -> Option<usize> {
        match self {
            Selection::Number(number) => usize::try_from(number).ok(),
            Selection::Overflow => None,
        }
    }
}

/// `None` for a token that is not an integer, which ends the selection line.
fn parse_selection(token: &str) -> Option<Selection> {
    if let Ok(number) = token.parse::<i64>() {
        return Some(Selection::Number(number));
    }

    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(Selection::Overflow)
    } else {
        None
    }
}
