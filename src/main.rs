mod args;
mod config;
mod reader;
mod writer;

use wdl::{
    input::InputRecord,
    services::{AccountQueryService, AccountService},
    Result,
};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut account_service = wdl::build_account_service();

    process_commands(&mut account_service)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&account_service)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file and run every withdrawal request through the handler
fn process_commands(account_service: &mut AccountService) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputRecord>() {
        log::debug!("Parsing record: {record:?}");
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing record into WithdrawMoneyCommand: {record:?}");
        let command = match record.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let event = account_service.withdraw(&command)?;
        log::debug!("Recorded decision event: {event:?}");
    }

    Ok(())
}

/// Build the balance report from the event log, and write it to stdout
fn report_to_std_out(account_service: &AccountService) -> Result {
    let queries = AccountQueryService::new(
        account_service.store(),
        account_service.initial_balance(),
    );

    let report = queries.build_report()?;
    log::debug!("Successfully built report for {} accounts", report.len());

    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing report rows...");
    for row in report.iter() {
        log::debug!("Serializing row: {row:?}");
        wtr.serialize(row)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    Ok(())
}
