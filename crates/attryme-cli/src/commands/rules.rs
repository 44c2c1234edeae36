use attryme::RuleRegistry;
use colored::Colorize;

pub fn execute() {
    let registry = RuleRegistry::new();

    println!("{}", "Registered rules:".bold());
    for tag in registry.tags() {
        println!("  {}", tag.cyan());
    }
    println!();
    println!(
        "{}",
        "Tags without a rule (checkbox, radio, string, ...) run no format check.".dimmed()
    );
}
