//! Per-domain act lists and regulatory notes (spec.md §4.4, §6
//! "Fixed tables required at runtime").

use nyayarag_core::{Domain, RegulatoryNotes};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The fixed per-domain act list (`JURISDICTION_ACTS`). Order matters:
/// `RegulatoryFilter` scores `+5` for any statute whose `act_code` appears
/// in its domain's list.
pub static JURISDICTION_ACTS: Lazy<HashMap<Domain, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(Domain::Criminal, vec!["IPC", "BNS", "CrPC", "BNSS", "IEA", "BSA"]);
    m.insert(
        Domain::Corporate,
        vec!["Companies Act", "SEBI Act", "Competition Act", "IBC"],
    );
    m.insert(Domain::ItCyber, vec!["IT Act", "DPDP Act", "IT Rules"]);
    m.insert(
        Domain::Environment,
        vec![
            "Environment Protection Act",
            "Air Act",
            "Water Act",
            "Wildlife Protection Act",
        ],
    );
    m.insert(
        Domain::CivilFamily,
        vec![
            "Hindu Marriage Act",
            "Special Marriage Act",
            "Hindu Succession Act",
            "CPC",
        ],
    );
    m.insert(
        Domain::Property,
        vec![
            "Transfer of Property Act",
            "Registration Act",
            "Indian Stamp Act",
            "RERA",
        ],
    );
    m.insert(
        Domain::Constitutional,
        vec!["Constitution of India", "CrPC", "BNSS"],
    );
    m.insert(
        Domain::Traffic,
        vec!["Motor Vehicles Act", "Central Motor Vehicle Rules", "IPC", "BNS"],
    );
    m
});

pub fn acts_for_domain(domain: Domain) -> &'static [&'static str] {
    JURISDICTION_ACTS
        .get(&domain)
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

/// Builds the `RegulatoryNotes` record `RegulatoryFilter` attaches to a
/// request, from the fixed template for `domain`. Falls back to an
/// empty-but-valid record if the domain has no template (should not
/// happen for any `Domain::ALL` member, see the test below).
pub fn regulatory_notes_for(domain: Domain) -> RegulatoryNotes {
    let template = REGULATORY_NOTES.get(&domain);
    RegulatoryNotes {
        jurisdiction: domain,
        applicable_acts: template
            .map(|t| t.applicable_acts.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default(),
        key_authorities: template
            .map(|t| t.key_authorities.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default(),
        filing_requirements: template
            .map(|t| t.filing_requirements.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default(),
        time_limits: template
            .map(|t| t.time_limits.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default(),
    }
}

#[derive(Debug, Clone)]
pub struct RegulatoryNoteTemplate {
    pub applicable_acts: Vec<&'static str>,
    pub key_authorities: Vec<&'static str>,
    pub filing_requirements: Vec<&'static str>,
    pub time_limits: Vec<&'static str>,
}

pub static REGULATORY_NOTES: Lazy<HashMap<Domain, RegulatoryNoteTemplate>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        Domain::Criminal,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["IPC", "BNS", "CrPC", "BNSS"],
            key_authorities: vec!["Local police station", "Judicial Magistrate", "Sessions Court"],
            filing_requirements: vec!["FIR at the jurisdictional police station", "Complaint under Section 200 CrPC/BNSS where FIR is refused"],
            time_limits: vec!["No limitation for cognizable offences; bailable/non-bailable status governs arrest procedure"],
        },
    );
    m.insert(
        Domain::Corporate,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["Companies Act", "SEBI Act", "IBC"],
            key_authorities: vec!["Registrar of Companies", "SEBI", "NCLT"],
            filing_requirements: vec!["Annual returns with the Registrar of Companies", "Disclosure filings with SEBI for listed entities"],
            time_limits: vec!["Annual filings due within 60 days of the AGM"],
        },
    );
    m.insert(
        Domain::ItCyber,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["IT Act", "DPDP Act"],
            key_authorities: vec!["CERT-In", "Data Protection Board", "Cyber Crime Cell"],
            filing_requirements: vec!["Cybercrime complaint via the National Cyber Crime Reporting Portal"],
            time_limits: vec!["Breach notification to CERT-In within 6 hours of becoming aware"],
        },
    );
    m.insert(
        Domain::CivilFamily,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["Hindu Marriage Act", "Special Marriage Act", "CPC"],
            key_authorities: vec!["Family Court", "District Court"],
            filing_requirements: vec!["Petition before the Family Court of the jurisdiction where the parties last resided together"],
            time_limits: vec!["One year of separation typically required before a mutual-consent divorce petition"],
        },
    );
    m.insert(
        Domain::Traffic,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["Motor Vehicles Act", "IPC", "BNS"],
            key_authorities: vec!["Traffic police", "Regional Transport Office", "Motor Accident Claims Tribunal"],
            filing_requirements: vec!["FIR for accidents causing injury or death", "Claim petition before MACT for compensation"],
            time_limits: vec!["Claim petition before MACT ordinarily within 6 months of the accident"],
        },
    );
    m.insert(
        Domain::Property,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["Transfer of Property Act", "Registration Act", "RERA"],
            key_authorities: vec!["Sub-Registrar of Assurances", "RERA Authority", "Civil Court"],
            filing_requirements: vec!["Registration of sale deed within 4 months of execution"],
            time_limits: vec!["Limitation for suits for possession: 12 years from dispossession"],
        },
    );
    m.insert(
        Domain::Constitutional,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["Constitution of India"],
            key_authorities: vec!["High Court (Art. 226)", "Supreme Court (Art. 32)"],
            filing_requirements: vec!["Writ petition stating the fundamental right infringed"],
            time_limits: vec!["No fixed limitation; laches may bar stale claims"],
        },
    );
    m.insert(
        Domain::Environment,
        RegulatoryNoteTemplate {
            applicable_acts: vec!["Environment Protection Act", "Air Act", "Water Act"],
            key_authorities: vec!["State Pollution Control Board", "National Green Tribunal"],
            filing_requirements: vec!["Application before the National Green Tribunal"],
            time_limits: vec!["Application to NGT within 6 months of the cause of action (extendable by 60 days)"],
        },
    );
    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_has_acts_and_notes() {
        for domain in Domain::ALL {
            assert!(!acts_for_domain(domain).is_empty());
            assert!(REGULATORY_NOTES.contains_key(&domain));
        }
    }
}
