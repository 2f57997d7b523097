use tasklint_enforce::types::RulesResult;
use tasklint_output::OutputFormatter;

/// Run `tasklint rules`: print the rule catalog.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    print!("{}", formatter.format_rules(&RulesResult::catalog()));
    0
}
