use energy_usage_monitor::prelude::*;
use energy_usage_monitor::ENERGY_SAVING_TIPS;
use std::env;
use std::io;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let tariff = match args.get(1) {
        Some(rate) => rate.parse::<f64>()?,
        None => 0.15,
    };

    println!("--- Calculator ---");
    let calculator = Calculator::new();
    let appliances = vec![
        Appliance::new("Refrigerator".to_string(), 1200.0),
        Appliance::new("Television".to_string(), 300.0),
        Appliance::new("Phone charger".to_string(), 15.0),
    ];

    for appliance in &appliances {
        println!(
            "{}: {:.2} kWh per month",
            appliance.name(),
            calculator.monthly_kwh(appliance)
        );
    }

    let total = calculator.total_monthly_kwh(&appliances);
    println!("Total: {:.2} kWh", total);

    if let Some(max) = calculator.max_monthly_appliance(&appliances) {
        println!("Highest: {}", max.name());
    }
    if let Some(min) = calculator.min_monthly_appliance(&appliances) {
        println!("Lowest: {}", min.name());
    }

    let budget = 30.0;
    match calculator.budget_status(total, budget) {
        BudgetStatus::Exceeded { over_by_kwh } => {
            println!("Over the {} kWh budget by {:.2} kWh", budget, over_by_kwh);
            for tip in ENERGY_SAVING_TIPS {
                println!("- {}", tip);
            }
        }
        BudgetStatus::Sustainable => println!("Within the {} kWh budget", budget),
    }

    println!("\n--- Billing at {} per kWh ---", tariff);
    let catalog = Catalog::new();
    let mut ledger = UsageLedger::new(tariff)?;

    for (number, appliance) in catalog.entries() {
        println!("{:>2}. {} ({} W/min)", number, appliance.name(), appliance.watts_per_minute());
    }

    // Microwave, smart thermostat and the LED bulb twice
    for (index, minutes, days) in [(4, 20.0, 30), (8, 600.0, 30), (0, 300.0, 30), (0, 60.0, 4)] {
        if let Some(appliance) = catalog.get(index) {
            ledger.add_usage(appliance.clone(), minutes, days);
        }
    }

    let mut thermostat = catalog.get(8).cloned().expect("catalog has a thermostat");
    thermostat.set_efficiency(0.7)?;
    print!("\n{}", thermostat.render(600.0, 30, tariff)?);

    println!();
    let report = ledger.build_report()?;
    let mut stdout = io::stdout();
    write_report(&report, ReportSink::Console(&mut stdout))?;

    Ok(())
}
