//! Built-in baseline catalog.

use curricula_core::{Grade, Jurisdiction, ResolvedStandard, StandardId, Subject};
use curricula_traits::CatalogProvider;

use crate::framework::{Framework, FrameworkMapper};
use crate::tables::{domains_for, FALLBACK};

/// Baseline catalog over the built-in content tables.
///
/// Standard IDs are `{prefix}.{subjectCode}.{grade}.{domainCode}.{n}`, where
/// the prefix comes from the framework the jurisdiction adopted. Two
/// jurisdictions sharing a prefix therefore produce identical IDs, which is
/// what lets the state baseline layer replace national entries in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog {
    mapper: FrameworkMapper,
}

impl BuiltinCatalog {
    /// Create a catalog using the given framework mapper.
    pub fn new(mapper: FrameworkMapper) -> Self {
        Self { mapper }
    }

    /// The framework mapper in use.
    pub fn mapper(&self) -> &FrameworkMapper {
        &self.mapper
    }
}

/// Build a standard ID.
pub fn standard_id(
    framework: &Framework,
    subject: &Subject,
    grade: Grade,
    domain: &str,
    n: usize,
) -> StandardId {
    StandardId::new(format!(
        "{}.{}.{}.{}.{}",
        framework.prefix,
        subject.code(),
        grade.level(),
        domain,
        n
    ))
}

fn entry(
    framework: &Framework,
    subject: &Subject,
    grade: Grade,
    domain: &str,
    n: usize,
    description: String,
) -> ResolvedStandard {
    ResolvedStandard::baseline(
        standard_id(framework, subject, grade, domain, n),
        framework.name,
        subject.clone(),
        grade,
        description,
        framework.source,
    )
}

impl CatalogProvider for BuiltinCatalog {
    fn base_standards(
        &self,
        subject: &Subject,
        grade: Grade,
        jurisdiction: &Jurisdiction,
    ) -> Vec<ResolvedStandard> {
        let framework = self.mapper.framework_for(jurisdiction, subject);

        match domains_for(subject) {
            Some(domains) => domains
                .iter()
                .flat_map(|d| {
                    d.items.iter().enumerate().map(move |(i, text)| {
                        entry(&framework, subject, grade, d.code, i + 1, (*text).to_string())
                    })
                })
                .collect(),
            None => FALLBACK
                .iter()
                .map(|(code, template)| {
                    let description = template
                        .replace("{subject}", subject.name())
                        .replace("{grade}", &grade.long_label());
                    entry(&framework, subject, grade, code, 1, description)
                })
                .collect(),
        }
    }
}
