use argfence_core::{
    Command, OperandArity, OptionArgument, OptionSchema, OptionValues, Program,
};
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_ENV: &str = "GIT_MOCK_LOG";

const EXIT_USAGE: i32 = 64;
const EXIT_SOFTWARE: i32 = 70;

fn main() {
    init_logging();

    let program = match build_program() {
        Ok(program) => program,
        Err(err) => {
            eprintln!("error: invalid command table: {err}");
            std::process::exit(EXIT_SOFTWARE);
        }
    };

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(?arguments, "dispatching");
    if let Err(err) = program.run(&arguments) {
        eprintln!("error: {err}");
        eprintln!("Run 'git-mock --help' for usage.");
        std::process::exit(EXIT_USAGE);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_program() -> Result<Program, argfence_core::ValidationError> {
    Program::new(vec![
        root_command(),
        init_command(),
        clone_command(),
        remote_add_command(),
        remote_remove_command(),
        commit_command(),
    ])
}

fn root_command() -> Command {
    let help = OptionSchema::flag("help").with_short('h');
    let version = OptionSchema::flag("version").with_short('V');

    Command::root()
        .with_option(help)
        .with_option(version.clone())
        .with_handler(move |program, _, _, options| {
            if options.has(&version) {
                println!("git-mock {PACKAGE_VERSION}");
            } else {
                print!("{}", usage(program));
            }
        })
}

fn init_command() -> Command {
    let bare = OptionSchema::flag("bare");
    let template = OptionSchema::optional("template", OptionArgument::Required).with_short('t');

    Command::new(["init"])
        .with_arity(OperandArity::ExactlyOrZero(1))
        .with_option(bare.clone())
        .with_option(template.clone())
        .with_handler(move |_, _, operands, options| {
            let directory = operands.first().map_or(".", String::as_str);
            let kind = if options.has(&bare) { "bare " } else { "" };
            match options.argument(&template) {
                Some(template) => println!(
                    "Initialized empty {kind}repository in {directory} from template {template}"
                ),
                None => println!("Initialized empty {kind}repository in {directory}"),
            }
        })
}

fn clone_command() -> Command {
    let branch = OptionSchema::optional("branch", OptionArgument::Required).with_short('b');
    let depth = OptionSchema::optional("depth", OptionArgument::Optional(Some("1".into())));

    Command::new(["clone"])
        .with_arity(OperandArity::Range(1, 2))
        .with_option(branch.clone())
        .with_option(depth.clone())
        .with_handler(move |_, _, operands, options| {
            let url = &operands[0];
            let directory = operands.get(1).map_or_else(|| default_directory(url), String::clone);
            let branch = options.argument(&branch).unwrap_or("HEAD");
            match options.argument(&depth) {
                Some(depth) => println!(
                    "Cloning {url} ({branch}, depth {depth}) into '{directory}'"
                ),
                None => println!("Cloning {url} ({branch}) into '{directory}'"),
            }
        })
}

fn remote_add_command() -> Command {
    let fetch = OptionSchema::flag("fetch").with_short('f');

    Command::new(["remote", "add"])
        .with_arity(OperandArity::Exactly(2))
        .with_option(fetch.clone())
        .with_handler(move |_, _, operands, options| {
            println!("Added remote '{}' -> {}", operands[0], operands[1]);
            if options.has(&fetch) {
                println!("Fetching {}", operands[0]);
            }
        })
}

fn remote_remove_command() -> Command {
    Command::new(["remote", "remove"])
        .with_arity(OperandArity::Exactly(1))
        .with_handler(|_, _, operands, _| println!("Removed remote '{}'", operands[0]))
}

fn commit_command() -> Command {
    let message = OptionSchema::required("message", OptionArgument::Required).with_short('m');
    let all = OptionSchema::flag("all").with_short('a');

    Command::new(["commit"])
        .with_option(message.clone())
        .with_option(all.clone())
        .with_handler(move |_, _, _, options| {
            let scope = if options.has(&all) { "all tracked changes" } else { "staged changes" };
            let text = options.argument(&message).unwrap_or_default();
            println!("Committed {scope}: {text}");
        })
}

/// Last path segment of a clone URL without its `.git` suffix.
fn default_directory(url: &str) -> String {
    let name = url
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(url);
    name.strip_suffix(".git").unwrap_or(name).to_string()
}

fn usage(program: &Program) -> String {
    let mut out = String::from("usage: git-mock <command> [options] [operands]\n\ncommands:\n");
    for command in program.commands() {
        let name = if command.name_path.is_empty() {
            "(none)".to_string()
        } else {
            command.display_name()
        };
        let options = command
            .options
            .iter()
            .map(|option| match option.short_form() {
                Some(short) => format!("{short}|{}", option.long_form()),
                None => option.long_form(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {name:<14} {:<20} {options}\n", command.arity.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_table_is_valid() {
        let program = build_program().unwrap();
        assert_eq!(program.commands().len(), 6);
    }

    #[test]
    fn test_default_directory() {
        assert_eq!(default_directory("https://host/org/repo.git"), "repo");
        assert_eq!(default_directory("git@host:repo.git"), "repo");
        assert_eq!(default_directory("https://host/org/repo/"), "repo");
    }

    #[test]
    fn test_usage_lists_commands() {
        let program = build_program().unwrap();
        let text = usage(&program);
        assert!(text.contains("remote add"));
        assert!(text.contains("-m|--message"));
    }
}
