use tasklint_core::identity::TaskIdentity;
use tasklint_enforce::types::IdentityResult;
use tasklint_output::OutputFormatter;

/// Run `tasklint identity <path>`: show how a task path decomposes.
pub fn run(formatter: &dyn OutputFormatter, path: &str, root_namespace: Option<&str>) -> i32 {
    match TaskIdentity::parse(path, root_namespace) {
        Ok(identity) => {
            println!("{}", formatter.format_identity(&IdentityResult::from(&identity)));
            0
        }
        Err(e) => {
            eprintln!("tasklint identity: {}", e);
            2
        }
    }
}
