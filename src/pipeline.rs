use anyhow::Result;

use crate::cli::AnalysisArgs;
use crate::ingest::read_lines;
use crate::registry::{KeyPolicy, Registry};
use crate::similarity::{SimilarPair, annotate};
use crate::statement::render_all;

#[derive(Debug, Clone)]
pub struct Analysis {
    pub registry: Registry,
    pub similar_pairs: Vec<SimilarPair>,
}

impl Analysis {
    pub fn statements(&self) -> Vec<String> {
        render_all(&self.registry)
    }
}

pub fn analyze_lines<I, S>(lines: I, limit: i64, policy: KeyPolicy) -> Analysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registry = Registry::ingest(lines, policy);
    let similar_pairs = annotate(&mut registry, limit);

    Analysis {
        registry,
        similar_pairs,
    }
}

pub fn analyze_input(args: &AnalysisArgs) -> Result<Analysis> {
    let lines = read_lines(&args.input)?;
    Ok(analyze_lines(lines, args.similarity_limit, args.key_policy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_duplicates_collapse_and_sort_by_key() {
        let analysis = analyze_lines(["Java", "java", "Python"], 2, KeyPolicy::Verbatim);

        assert_eq!(analysis.registry.len(), 2);
        assert_eq!(
            analysis.statements(),
            vec![
                "insert into technology (name) values ('Java'); -- you should review this name, multiple occurrences were found",
                "insert into technology (name) values ('Python');",
            ]
        );
    }

    #[test]
    fn near_misspelling_is_reported_both_ways() {
        let analysis = analyze_lines(["Pythn", "Python"], 2, KeyPolicy::Verbatim);

        assert_eq!(analysis.similar_pairs.len(), 1);
        assert_eq!(analysis.similar_pairs[0].distance, 2);
        assert_eq!(
            analysis.statements(),
            vec![
                "insert into technology (name) values ('Pythn'); -- similar technologies found: Python",
                "insert into technology (name) values ('Python'); -- similar technologies found: Pythn",
            ]
        );
    }

    #[test]
    fn distant_names_stay_unannotated() {
        let analysis = analyze_lines(["Go", "C++"], 2, KeyPolicy::Verbatim);

        assert!(analysis.similar_pairs.is_empty());
        assert_eq!(
            analysis.statements(),
            vec![
                "insert into technology (name) values ('C++');",
                "insert into technology (name) values ('Go');",
            ]
        );
    }

    #[test]
    fn empty_input_produces_nothing() {
        let analysis = analyze_lines(Vec::<String>::new(), 2, KeyPolicy::Verbatim);

        assert!(analysis.registry.is_empty());
        assert!(analysis.similar_pairs.is_empty());
        assert!(analysis.statements().is_empty());
    }

    #[test]
    fn zero_limit_leaves_one_character_difference_alone() {
        let analysis = analyze_lines(["abc", "abd"], 0, KeyPolicy::Verbatim);

        assert!(analysis.similar_pairs.is_empty());
        assert!(analysis.statements().iter().all(|s| !s.contains("--")));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let lines = [
            "TypeScript", "Typescript", "JavaScript", "Javascrpt", "React", "Reakt", "Vue",
            "Vue.js", "Node", "node", "Nodes", "Go", "Golang",
        ];

        let first = analyze_lines(lines, 2, KeyPolicy::Verbatim);
        let second = analyze_lines(lines, 2, KeyPolicy::Verbatim);

        assert_eq!(first.statements(), second.statements());
        assert_eq!(first.similar_pairs, second.similar_pairs);
    }
}
