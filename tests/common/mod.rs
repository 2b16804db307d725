//! Shared helpers for the domain search test suite

use kodegen_tools_domain_search::DomainRegistry;

/// Registry used by scenario tests
#[allow(dead_code)]
pub fn registry(domains: &[&str]) -> DomainRegistry {
    DomainRegistry::new(domains).expect("test registry must be valid")
}

/// The fully decoded composite query expected for `query` over `domains`
#[allow(dead_code)]
pub fn expected_query(query: &str, domains: &[&str]) -> String {
    let clauses = domains
        .iter()
        .map(|d| format!("site:{d}"))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("{query} {clauses}")
}
