//! Apply a single inference rule to a goal set read from JSON

use spiderproof::json::ApplicationJson;
use spiderproof::reasoning::rules::{all_rules, rule_by_name};
use spiderproof::{ApplicationMode, Goals, RuleApplication, RuleArg, RuleArgKind};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <goals.json> <rule> [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  --subgoal <n>       Index of the goal to work on (default: 0)");
    eprintln!("  --sub-diagram <n>   Compound sub-diagram index within the goal (default: 0)");
    eprintln!("  --mode <mode>       plain, forward or backward (default: backward)");
    eprintln!("  --json              Print the result as JSON");
    eprintln!("  --verbose           Enable debug logging");
    eprintln!("\nRules:");
    for rule in all_rules() {
        eprintln!("  {:<18}  {}", rule.name(), rule.description());
    }
    std::process::exit(1);
}

fn parse_index(args: &[String], i: usize, flag: &str) -> usize {
    match args.get(i + 1).map(|s| s.parse::<usize>()) {
        Some(Ok(n)) => n,
        _ => {
            eprintln!("{} expects a non-negative integer", flag);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        usage(&args[0]);
    }

    let filename = &args[1];
    let rule_name = &args[2];
    let mut subgoal_index = 0;
    let mut sub_diagram_index = 0;
    let mut mode = ApplicationMode::Backward;
    let mut json_output = false;
    let mut verbose = false;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--subgoal" => {
                subgoal_index = parse_index(&args, i, "--subgoal");
                i += 1;
            }
            "--sub-diagram" => {
                sub_diagram_index = parse_index(&args, i, "--sub-diagram");
                i += 1;
            }
            "--mode" => {
                match args.get(i + 1).map(|s| s.parse::<ApplicationMode>()) {
                    Some(Ok(m)) => mode = m,
                    Some(Err(e)) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                    None => usage(&args[0]),
                }
                i += 1;
            }
            "--json" => json_output = true,
            "--verbose" => verbose = true,
            _ => {
                eprintln!("Unknown option: {}", args[i]);
            }
        }
        i += 1;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let Some(rule) = rule_by_name(rule_name) else {
        eprintln!("Unknown rule: {}", rule_name);
        usage(&args[0]);
    };

    let content = match std::fs::read_to_string(filename) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", filename, e);
            std::process::exit(1);
        }
    };
    let goals: Goals = match serde_json::from_str(&content) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid goals in {}: {}", filename, e);
            std::process::exit(1);
        }
    };
    debug!(goals = goals.goals_count(), file = %filename, "loaded goals");

    let rule_arg = rule.argument_kind().map(|kind| match kind {
        RuleArgKind::SubgoalIndex => RuleArg::subgoal(subgoal_index),
        RuleArgKind::SubDiagramIndex => RuleArg::sub_diagram(subgoal_index, sub_diagram_index),
    });
    let application = RuleApplication::new(rule, rule_arg);

    match application.apply_in(mode, &goals) {
        Ok(result) => {
            if json_output {
                print_json(&ApplicationJson::applied(rule.name(), &result));
            } else {
                match result.goals() {
                    Some(goals) if !goals.is_empty() => println!("{}", goals),
                    _ => println!("All goals discharged"),
                }
            }
        }
        Err(e) => {
            if json_output {
                print_json(&ApplicationJson::failed(rule.name(), &e));
            } else {
                eprintln!("{}: {} [{}]", rule.pretty_name(), e, e.message_key());
            }
            std::process::exit(1);
        }
    }
}

fn print_json(value: &ApplicationJson) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}
