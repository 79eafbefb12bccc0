use crate::infra::{InMemoryCatalog, InMemoryProfileStore};
use clap::Args;
use regelhulp::error::AppError;
use regelhulp::matching::{
    EmploymentStatus, HousingType, IncomeRange, MatchingService, QuestionnaireAnswers, UserId,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Number of children in the household
    #[arg(long, default_value_t = 0)]
    pub(crate) children: u32,
    /// Ages of the children, comma separated (e.g. "1,5")
    #[arg(long, value_delimiter = ',')]
    pub(crate) ages: Vec<u32>,
    /// Household has a single parent
    #[arg(long)]
    pub(crate) single_parent: bool,
    /// Income range: low, middle, or high
    #[arg(long, value_parser = parse_income)]
    pub(crate) income: Option<IncomeRange>,
    /// Employment status: employed, unemployed, self_employed, or student
    #[arg(long, value_parser = parse_employment)]
    pub(crate) employment: Option<EmploymentStatus>,
    /// Housing situation: rent or own
    #[arg(long, value_parser = parse_housing)]
    pub(crate) housing: Option<HousingType>,
    /// Monthly rent in euros (only meaningful when renting)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) rent: f64,
    /// Household is not registered as resident in the Netherlands
    #[arg(long)]
    pub(crate) no_residence: bool,
    /// Household has Dutch health insurance
    #[arg(long)]
    pub(crate) insured: bool,
    /// Household has problematic debts
    #[arg(long)]
    pub(crate) debts: bool,
    /// Savings are under the social assistance limit
    #[arg(long)]
    pub(crate) savings_under_limit: bool,
    /// Persist the answers under this user id before scoring
    #[arg(long)]
    pub(crate) user: Option<String>,
}

pub(crate) fn run_match_demo(args: MatchArgs) -> Result<(), AppError> {
    let answers = QuestionnaireAnswers {
        number_of_children: args.children,
        children_ages: args.ages.clone(),
        is_single_parent: args.single_parent,
        income_range: args.income.unwrap_or_default(),
        employment_status: args.employment.unwrap_or_default(),
        housing_type: args.housing.unwrap_or_default(),
        monthly_rent: args.rent,
        postal_code: String::new(),
        has_dutch_residence: !args.no_residence,
        has_health_insurance: args.insured,
        has_debts: args.debts,
        savings_under_limit: args.savings_under_limit,
    };

    let service = MatchingService::new(
        Arc::new(InMemoryCatalog::seeded()),
        Arc::new(InMemoryProfileStore::default()),
    );
    let caller = args.user.map(UserId);
    let report = service.evaluate(&answers, caller.as_ref())?;

    println!("Derived tags: {}", format_list(&report.user_tags));
    println!(
        "{} of the seeded programs cleared the cutoff\n",
        report.total_found
    );

    for (rank, result) in report.matches.iter().enumerate() {
        println!(
            "{:>2}. {} ({}) — score {}",
            rank + 1,
            result.title,
            result.slug,
            result.match_score
        );
        println!("    {} | {}", result.category, result.provider);
        if !result.estimated_amount.is_empty() {
            println!("    bedrag: {}", result.estimated_amount);
        }
        if !result.match_reasons.is_empty() {
            println!("    redenen: {}", result.match_reasons.join(", "));
        }
    }

    Ok(())
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn parse_income(raw: &str) -> Result<IncomeRange, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "low" => Ok(IncomeRange::Low),
        "middle" => Ok(IncomeRange::Middle),
        "high" => Ok(IncomeRange::High),
        other => Err(format!("unknown income range '{other}'")),
    }
}

fn parse_employment(raw: &str) -> Result<EmploymentStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "employed" => Ok(EmploymentStatus::Employed),
        "unemployed" => Ok(EmploymentStatus::Unemployed),
        "self_employed" | "self-employed" => Ok(EmploymentStatus::SelfEmployed),
        "student" => Ok(EmploymentStatus::Student),
        other => Err(format!("unknown employment status '{other}'")),
    }
}

fn parse_housing(raw: &str) -> Result<HousingType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "rent" => Ok(HousingType::Rent),
        "own" => Ok(HousingType::Own),
        other => Err(format!("unknown housing type '{other}'")),
    }
}
