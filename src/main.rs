use std::error::Error;
use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, Command};
use csv::{ReaderBuilder, Trim};
use env_logger::{Builder, Env};

use edf_dvfs::constants::DEFAULT_CHART_WIDTH;
use edf_dvfs::core::simulation;
use edf_dvfs::input::prompt_tasks;
use edf_dvfs::report::{render_chart, render_summary, render_table};
use edf_dvfs::{ClockMode, PowerModel, SchedulerOptions, Task, TaskSet, TimeStep};

/// Reads a task file (`priority, burst, deadline` per line) and returns a `TaskSet`
pub fn read_task_file(file_path: &str) -> Result<TaskSet, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(file_path)?;
    let mut taskset = TaskSet::new_empty();

    for result in rdr.records() {
        let record = result?;
        if record.len() != 3 {
            return Err(format!("expected 3 fields, found {} in {:?}", record.len(), record).into());
        }

        let priority: u8 = record[0].parse()?;
        let burst_time: TimeStep = record[1].parse()?;
        let deadline: TimeStep = record[2].parse()?;

        let id = taskset.next_id();
        taskset.add_task(Task::new(id, priority, burst_time, deadline)?)?;
    }

    if taskset.is_empty() {
        return Err("task file contains no tasks".into());
    }

    Ok(taskset)
}

pub fn build_cli_command() -> Command {
    Command::new("edf-dvfs")
    .version("0.1.0")
    .about("Simulates EDF scheduling with DVFS and reports the energy consumed")

    .arg(Arg::new("task_file")
        .help("CSV file with one `priority, burst_ms, deadline_ms` task per line; prompts interactively when omitted"))

    .arg(Arg::new("clock")
        .short('c')
        .long("clock")
        .help("Time axis of the energy trace")
        .value_parser(["logical", "wall"])
        .default_value("logical"))

    .arg(Arg::new("pacing")
        .short('p')
        .long("pacing")
        .help("Milliseconds to pause after each task")
        .value_parser(clap::value_parser!(u64))
        .default_value("0"))

    .arg(Arg::new("width")
        .short('w')
        .long("width")
        .help("Width of the ASCII energy chart")
        .value_parser(clap::value_parser!(usize))
        .default_value("50"))

    .arg(Arg::new("no_chart")
        .long("no-chart")
        .help("Skip the ASCII energy chart")
        .action(ArgAction::SetTrue))
}

fn scheduler_options(matches: &ArgMatches) -> SchedulerOptions {
    let clock = match matches.get_one::<String>("clock").map(String::as_str) {
        Some("wall") => ClockMode::WallClock,
        _ => ClockMode::Logical,
    };
    let pacing = matches.get_one::<u64>("pacing").copied().unwrap_or(0);

    SchedulerOptions {
        clock,
        pacing: Duration::from_millis(pacing),
        power_model: PowerModel::default(),
    }
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    // edf-dvfs [task_file] [-c logical|wall] [-p <ms>] [-w <cols>] [--no-chart]
    let matches: ArgMatches = build_cli_command().get_matches();

    println!("Energy-Efficient CPU Scheduler Simulation");

    let taskset = match matches.get_one::<String>("task_file") {
        Some(path) => read_task_file(path),
        None => {
            let stdin = io::stdin();
            prompt_tasks(&mut stdin.lock(), &mut io::stdout()).map_err(Box::<dyn Error>::from)
        }
    };
    let taskset = match taskset {
        Ok(taskset) => taskset,
        Err(e) => {
            eprintln!("Error reading tasks: {}", e);
            process::exit(5);
        }
    };

    println!("\nStarting simulation...");
    let report = match simulation(taskset, scheduler_options(&matches)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(5);
        }
    };

    println!("\n{}", render_summary(report.total_energy));
    println!("\nEnergy Consumption Over Time:");
    print!("{}", render_table(&report.trace));

    if !matches.get_flag("no_chart") {
        let width = matches.get_one::<usize>("width").copied().unwrap_or(DEFAULT_CHART_WIDTH);
        println!("\nSimple ASCII Chart:");
        print!("{}", render_chart(&report.trace, width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_task_file_valid() {
        let task_file_content = "\
            5, 500, 1000\n\
            1, 20, 40";
        let file_path = "test_tasks.csv";

        std::fs::write(file_path, task_file_content).expect("Unable to write test file");

        let taskset = read_task_file(file_path).expect("Failed to read task set");
        let task = &taskset.get_tasks()[1];

        assert_eq!(taskset.len(), 2);
        assert_eq!(task.id(), 2);
        assert_eq!(task.priority(), 1);
        assert_eq!(task.burst_time(), 20);
        assert_eq!(task.deadline(), 40);

        std::fs::remove_file(file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_read_task_file_malformed_rows() {
        let file_path = "test_malformed_rows.csv";

        // missing deadline
        std::fs::write(file_path, "4, 250\n").expect("Unable to write test file");
        assert!(read_task_file(file_path).is_err());

        // non-numeric burst on the second task
        std::fs::write(file_path, "4, 250, 500\n2, fast, 800\n").expect("Unable to write test file");
        assert!(read_task_file(file_path).is_err());

        std::fs::write(file_path, "").expect("Unable to write test file");
        assert!(read_task_file(file_path).is_err());

        std::fs::remove_file(file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_read_task_file_out_of_range() {
        let file_path = "test_out_of_range.csv";

        std::fs::write(file_path, "11, 100, 200").expect("Unable to write test file");
        assert!(read_task_file(file_path).is_err());

        std::fs::write(file_path, "3, 100, 0").expect("Unable to write test file");
        assert!(read_task_file(file_path).is_err());

        std::fs::remove_file(file_path).expect("Failed to clean up test file");
    }

    #[test]
    fn test_command_line_arguments() {
        let matches = build_cli_command().try_get_matches_from(vec![
            "edf-dvfs",
            "tasks.csv",
            "-c",
            "wall",
            "-p",
            "100",
            "--no-chart",
        ]);

        assert!(matches.is_ok());
        let matches = matches.unwrap();

        assert_eq!(matches.get_one::<String>("task_file").unwrap(), "tasks.csv");
        assert_eq!(*matches.get_one::<u64>("pacing").unwrap(), 100);
        assert!(matches.get_flag("no_chart"));

        let options = scheduler_options(&matches);
        assert_eq!(options.clock, ClockMode::WallClock);
        assert_eq!(options.pacing, Duration::from_millis(100));
    }

    #[test]
    fn test_command_line_defaults() {
        let matches = build_cli_command()
            .try_get_matches_from(vec!["edf-dvfs"])
            .unwrap();

        assert!(matches.get_one::<String>("task_file").is_none());
        assert_eq!(*matches.get_one::<usize>("width").unwrap(), 50);
        assert!(!matches.get_flag("no_chart"));

        let options = scheduler_options(&matches);
        assert_eq!(options.clock, ClockMode::Logical);
        assert!(options.pacing.is_zero());
    }

    #[test]
    fn test_command_line_rejects_unknown_clock() {
        let matches = build_cli_command().try_get_matches_from(vec!["edf-dvfs", "-c", "sundial"]);
        assert!(matches.is_err());
    }
}
