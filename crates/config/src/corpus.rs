//! Per-domain BM25 classification corpus (spec.md §4.1 rule 3), grounded
//! on `bm25_service.py`'s `DOMAIN_CORPUS`: each domain is represented by a
//! handful of pseudo-documents of characteristic vocabulary, scored against
//! the query with BM25 and fused with the semantic classifier.

use nyayarag_core::Domain;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static DOMAIN_CORPUS: Lazy<HashMap<Domain, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        Domain::Criminal,
        vec![
            "murder theft robbery assault criminal offence ipc bns fir police arrest bail",
            "dowry death rape kidnapping cheating forgery criminal breach of trust",
            "cognizable bailable non bailable sessions court magistrate charge sheet",
        ],
    );
    m.insert(
        Domain::CivilFamily,
        vec![
            "divorce maintenance alimony child custody marriage hindu marriage act",
            "domestic violence dowry harassment family court mutual consent",
            "succession inheritance will probate adoption guardianship",
        ],
    );
    m.insert(
        Domain::Corporate,
        vec![
            "company director shareholder board resolution companies act sebi",
            "insolvency bankruptcy ibc nclt winding up merger acquisition",
            "contract breach commercial dispute arbitration corporate governance",
        ],
    );
    m.insert(
        Domain::ItCyber,
        vec![
            "cyber crime hacking data breach phishing identity theft it act",
            "data protection privacy dpdp personal data fiduciary consent",
            "online fraud social media defamation cyberbullying digital evidence",
        ],
    );
    m.insert(
        Domain::Traffic,
        vec![
            "accident motor vehicle act driving licence traffic challan",
            "hit and run rash driving drunk driving insurance claim mact",
            "vehicle registration rto fitness certificate pollution challan",
        ],
    );
    m.insert(
        Domain::Property,
        vec![
            "property sale deed registration transfer of property act title",
            "tenant landlord eviction rent lease agreement possession",
            "rera real estate builder delay partition land dispute",
        ],
    );
    m.insert(
        Domain::Constitutional,
        vec![
            "fundamental rights constitution writ petition article 32 article 226",
            "high court supreme court public interest litigation habeas corpus",
            "directive principles equality freedom of speech reservation",
        ],
    );
    m.insert(
        Domain::Environment,
        vec![
            "pollution environment protection act air water wildlife forest",
            "national green tribunal ngt environmental clearance emission",
            "deforestation mining permit coastal regulation zone",
        ],
    );
    m
});

/// Stopwords dropped before BM25 tokenization, per `bm25_service.py`'s
/// stopword list (trimmed to the subset relevant for domain corpora).
pub static STOP_WORDS: Lazy<std::collections::HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "and", "or", "but",
        "if", "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "to", "from", "in", "on", "what", "which", "who", "whom", "this", "that",
        "these", "those", "my", "i", "me", "can", "will", "do", "does", "did", "how",
    ]
    .into_iter()
    .collect()
});

pub fn corpus_for_domain(domain: Domain) -> &'static [&'static str] {
    DOMAIN_CORPUS
        .get(&domain)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_has_corpus() {
        for domain in Domain::ALL {
            assert!(!corpus_for_domain(domain).is_empty());
        }
    }

    #[test]
    fn stopwords_contain_common_english() {
        assert!(STOP_WORDS.contains("the"));
        assert!(!STOP_WORDS.contains("murder"));
    }
}
