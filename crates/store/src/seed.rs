//! Representative statute/case/mapping records for the in-memory store.
//!
//! Grounded on `original_source/backend/app/data/legal_seeds.py` and
//! `backend/app/services/statute_service.py`/`case_service.py`'s query
//! shapes (exact section×act lookup, `LIKE`-style text search, landmark
//! filtering) — not on the CSV file itself (`schema seeding from CSV` is
//! out of scope per spec.md §1). Section coverage matches
//! `nyayarag_config::COMMON_IPC_SECTIONS` and `IPC_SECTION_DOCS` so a
//! freshly constructed store resolves every section those tables name.

use once_cell::sync::Lazy;

use nyayarag_core::{Case, Domain, Mapping, MappingType, Statute};

macro_rules! statute {
    ($id:expr, $act:expr, $act_name:expr, $section:expr, $title:expr, $content:expr, $domain:expr, $year:expr, $cog:expr, $bail:expr, $punishment:expr) => {
        Statute {
            id: $id.to_string(),
            act_code: $act.to_string(),
            act_name: $act_name.to_string(),
            section_number: $section.to_string(),
            title: $title.to_string(),
            content: $content.to_string(),
            domain: $domain,
            year_enacted: Some($year),
            is_cognizable: $cog,
            is_bailable: $bail,
            punishment_description: Some($punishment.to_string()),
        }
    };
}

pub static STATUTES: Lazy<Vec<Statute>> = Lazy::new(|| {
    vec![
        statute!(
            "ipc-299", "IPC", "Indian Penal Code", "299", "Culpable homicide",
            "Whoever causes death by doing an act with the intention of causing death, or with the \
             intention of causing such bodily injury as is likely to cause death, or with the knowledge \
             that he is likely by such act to cause death, commits the offence of culpable homicide.",
            Domain::Criminal, 1860, true, false,
            "Punishable under section 304, depending on whether the act amounts to murder."
        ),
        statute!(
            "ipc-300", "IPC", "Indian Penal Code", "300", "Murder",
            "Except in the cases hereinafter excepted, culpable homicide is murder if the act by which \
             the death is caused is done with the intention of causing death, or with the intention of \
             causing such bodily injury as the offender knows to be likely to cause the death of the \
             person to whom the harm is caused.",
            Domain::Criminal, 1860, true, false,
            "Punishable under section 302."
        ),
        statute!(
            "ipc-302", "IPC", "Indian Penal Code", "302", "Punishment for murder",
            "1. Subs. by Act 7 of 2017, s. 169 Whoever commits murder shall be punished with death, or \
             imprisonment for life, and shall also be liable to fine. (w.e.f. 26-5-2017) The gravity of \
             the offence requires the court to record special reasons before imposing a sentence other \
             than death where the minimum punishment prescribed is life imprisonment.",
            Domain::Criminal, 1860, true, false,
            "Death or imprisonment for life, and fine"
        ),
        statute!(
            "ipc-304", "IPC", "Indian Penal Code", "304", "Punishment for culpable homicide not amounting to murder",
            "Whoever commits culpable homicide not amounting to murder shall be punished with \
             imprisonment for life, or imprisonment of either description for a term which may extend \
             to ten years, and shall also be liable to fine, if the act is done with the intention of \
             causing death, or with the intention of causing such bodily injury as is likely to cause death.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment for life or up to 10 years, and fine"
        ),
        statute!(
            "ipc-304b", "IPC", "Indian Penal Code", "304B", "Dowry death",
            "Where the death of a woman is caused by any burns or bodily injury or occurs otherwise than \
             under normal circumstances within seven years of her marriage and it is shown that soon \
             before her death she was subjected to cruelty or harassment by her husband or any relative \
             of her husband for, or in connection with, any demand for dowry, such death shall be called \
             dowry death.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment not less than seven years, may extend to imprisonment for life"
        ),
        statute!(
            "ipc-306", "IPC", "Indian Penal Code", "306", "Abetment of suicide",
            "If any person commits suicide, whoever abets the commission of such suicide, shall be \
             punished with imprisonment of either description for a term which may extend to ten years, \
             and shall also be liable to fine.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment up to 10 years, and fine"
        ),
        statute!(
            "ipc-307", "IPC", "Indian Penal Code", "307", "Attempt to murder",
            "Whoever does any act with such intention or knowledge, and under such circumstances that, \
             if he by that act caused death, he would be guilty of murder, shall be punished with \
             imprisonment of either description for a term which may extend to ten years, and shall \
             also be liable to fine; and if hurt is caused to any person by such act, the offender shall \
             be liable either to imprisonment for life, or to such punishment as is hereinbefore mentioned.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment up to 10 years, or life imprisonment if hurt is caused, and fine"
        ),
        statute!(
            "ipc-323", "IPC", "Indian Penal Code", "323", "Punishment for voluntarily causing hurt",
            "Whoever, except in the case provided for by section 334, voluntarily causes hurt, shall be \
             punished with imprisonment of either description for a term which may extend to one year, \
             or with fine which may extend to one thousand rupees, or with both.",
            Domain::Criminal, 1860, false, true,
            "Imprisonment up to 1 year, or fine up to Rs. 1,000, or both"
        ),
        statute!(
            "ipc-354", "IPC", "Indian Penal Code", "354", "Assault or criminal force to woman with intent to outrage her modesty",
            "Whoever assaults or uses criminal force to any woman, intending to outrage or knowing it to \
             be likely that he will thereby outrage her modesty, shall be punished with imprisonment of \
             either description for a term which shall not be less than one year but which may extend to \
             five years, and shall also be liable to fine.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment 1 to 5 years, and fine"
        ),
        statute!(
            "ipc-375", "IPC", "Indian Penal Code", "375", "Rape",
            "A man is said to commit rape if he penetrates his penis, to any extent, into the vagina, \
             mouth, urethra or anus of a woman or makes her do so with him or any other person, under the \
             circumstances described in the seven descriptions following this section.",
            Domain::Criminal, 1860, true, false,
            "See section 376 for punishment"
        ),
        statute!(
            "ipc-376", "IPC", "Indian Penal Code", "376", "Punishment for rape",
            "Whoever, except in the cases provided for in sub-section (2), commits rape shall be punished \
             with rigorous imprisonment of either description for a term which shall not be less than ten \
             years, but which may extend to imprisonment for life, and shall also be liable to fine.",
            Domain::Criminal, 1860, true, false,
            "Rigorous imprisonment 10 years to life, and fine"
        ),
        statute!(
            "ipc-379", "IPC", "Indian Penal Code", "379", "Punishment for theft",
            "Whoever commits theft shall be punished with imprisonment of either description for a term \
             which may extend to three years, or with fine, or with both.",
            Domain::Criminal, 1860, true, true,
            "Imprisonment up to 3 years, or fine, or both"
        ),
        statute!(
            "ipc-380", "IPC", "Indian Penal Code", "380", "Theft in dwelling house",
            "Whoever commits theft in any building, tent or vessel, which building, tent or vessel is \
             used as a human dwelling, or used for the custody of property, shall be punished with \
             imprisonment of either description for a term which may extend to seven years, and shall \
             also be liable to fine.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment up to 7 years, and fine"
        ),
        statute!(
            "ipc-392", "IPC", "Indian Penal Code", "392", "Punishment for robbery",
            "Whoever commits robbery shall be punished with rigorous imprisonment for a term which may \
             extend to ten years, and shall also be liable to fine; and, if the robbery be committed on \
             the highway between sunset and sunrise, the imprisonment may be extended to fourteen years.",
            Domain::Criminal, 1860, true, false,
            "Rigorous imprisonment up to 10 years (14 on highway at night), and fine"
        ),
        statute!(
            "ipc-406", "IPC", "Indian Penal Code", "406", "Punishment for criminal breach of trust",
            "Whoever commits criminal breach of trust shall be punished with imprisonment of either \
             description for a term which may extend to three years, or with fine, or with both.",
            Domain::Criminal, 1860, true, true,
            "Imprisonment up to 3 years, or fine, or both"
        ),
        statute!(
            "ipc-420", "IPC", "Indian Penal Code", "420", "Cheating and dishonestly inducing delivery of property",
            "Whoever cheats and thereby dishonestly induces the person deceived to deliver any property \
             to any person, or to make, alter or destroy the whole or any part of a valuable security, \
             shall be punished with imprisonment of either description for a term which may extend to \
             seven years, and shall also be liable to fine.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment up to 7 years, and fine"
        ),
        statute!(
            "ipc-498a", "IPC", "Indian Penal Code", "498A", "Husband or relative of husband subjecting a woman to cruelty",
            "Whoever, being the husband or the relative of the husband of a woman, subjects such woman to \
             cruelty shall be punished with imprisonment for a term which may extend to three years and \
             shall also be liable to fine.",
            Domain::Criminal, 1860, true, false,
            "Imprisonment up to 3 years, and fine"
        ),
        statute!(
            "ipc-499", "IPC", "Indian Penal Code", "499", "Defamation",
            "Whoever, by words either spoken or intended to be read, or by signs or by visible \
             representations, makes or publishes any imputation concerning any person intending to harm, \
             or knowing or having reason to believe that such imputation will harm, the reputation of \
             such person, is said, except in the cases hereinafter excepted, to defame that person.",
            Domain::Criminal, 1860, false, true,
            "See section 500 for punishment"
        ),
        statute!(
            "ipc-500", "IPC", "Indian Penal Code", "500", "Punishment for defamation",
            "Whoever defames another shall be punished with simple imprisonment for a term which may \
             extend to two years, or with fine, or with both.",
            Domain::Criminal, 1860, false, true,
            "Simple imprisonment up to 2 years, or fine, or both"
        ),
        statute!(
            "ipc-506", "IPC", "Indian Penal Code", "506", "Punishment for criminal intimidation",
            "Whoever commits the offence of criminal intimidation shall be punished with imprisonment of \
             either description for a term which may extend to two years, or with fine, or with both; \
             if threat be to cause death or grievous hurt, etc., the term may extend to seven years.",
            Domain::Criminal, 1860, false, true,
            "Imprisonment up to 2 years (7 for aggravated threats), or fine, or both"
        ),
        statute!(
            "ipc-509", "IPC", "Indian Penal Code", "509", "Word, gesture or act intended to insult the modesty of a woman",
            "Whoever, intending to insult the modesty of any woman, utters any word, makes any sound or \
             gesture, or exhibits any object, intending that such word or sound shall be heard, or that \
             such gesture or object shall be seen, by such woman, or intrudes upon the privacy of such \
             woman, shall be punished with simple imprisonment for a term which may extend to three years, \
             and also with fine.",
            Domain::Criminal, 1860, true, true,
            "Simple imprisonment up to 3 years, and fine"
        ),
        // BNS counterparts
        statute!(
            "bns-103-1", "BNS", "Bharatiya Nyaya Sanhita", "103", "Punishment for murder",
            "Whoever commits murder shall be punished with death or imprisonment for life, and shall also \
             be liable to fine; when committed by five or more persons acting in concert on grounds of \
             race, caste, community, sex, place of birth, language, personal belief or any other ground, \
             each shall be punished with death or imprisonment for life.",
            Domain::Criminal, 2023, true, false,
            "Death or imprisonment for life, and fine"
        ),
        statute!(
            "bns-105", "BNS", "Bharatiya Nyaya Sanhita", "105", "Punishment for culpable homicide not amounting to murder",
            "Whoever commits culpable homicide not amounting to murder shall be punished with \
             imprisonment for life, or imprisonment of either description for a term which may extend to \
             ten years, and shall also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment for life or up to 10 years, and fine"
        ),
        statute!(
            "bns-80", "BNS", "Bharatiya Nyaya Sanhita", "80", "Dowry death",
            "Where the death of a woman is caused by burns or bodily injury or occurs otherwise than \
             under normal circumstances within seven years of her marriage and soon before her death she \
             was subjected to cruelty or harassment in connection with a demand for dowry, such death \
             shall be called dowry death.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment not less than seven years, may extend to imprisonment for life"
        ),
        statute!(
            "bns-108", "BNS", "Bharatiya Nyaya Sanhita", "108", "Abetment of suicide",
            "If any person commits suicide, whoever abets the commission of such suicide shall be \
             punished with imprisonment of either description for a term which may extend to ten years, \
             and shall also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment up to 10 years, and fine"
        ),
        statute!(
            "bns-109", "BNS", "Bharatiya Nyaya Sanhita", "109", "Attempt to murder",
            "Whoever does any act with such intention or knowledge, and under such circumstances that, \
             if he by that act caused death, he would be guilty of murder, shall be punished with \
             imprisonment of either description for a term which may extend to ten years, and shall also \
             be liable to fine; if hurt is caused, the offender shall be liable to imprisonment for life.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment up to 10 years, or life imprisonment if hurt is caused, and fine"
        ),
        statute!(
            "bns-115-2", "BNS", "Bharatiya Nyaya Sanhita", "115", "Voluntarily causing hurt",
            "Whoever, except in the case provided for by section 122, voluntarily causes hurt, shall be \
             punished with imprisonment of either description for a term which may extend to one year, \
             or with fine which may extend to ten thousand rupees, or with both.",
            Domain::Criminal, 2023, false, true,
            "Imprisonment up to 1 year, or fine up to Rs. 10,000, or both"
        ),
        statute!(
            "bns-74", "BNS", "Bharatiya Nyaya Sanhita", "74", "Assault or use of criminal force to woman with intent to outrage her modesty",
            "Whoever assaults or uses criminal force to any woman, intending to outrage or knowing it to \
             be likely that he will thereby outrage her modesty, shall be punished with imprisonment of \
             either description for a term which shall not be less than one year but which may extend to \
             five years, and shall also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment 1 to 5 years, and fine"
        ),
        statute!(
            "bns-64", "BNS", "Bharatiya Nyaya Sanhita", "64", "Punishment for rape",
            "Whoever, except in the cases provided for in sub-section (2), commits rape shall be punished \
             with rigorous imprisonment of either description for a term which shall not be less than ten \
             years, but which may extend to imprisonment for life, and shall also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Rigorous imprisonment 10 years to life, and fine"
        ),
        statute!(
            "bns-303-2", "BNS", "Bharatiya Nyaya Sanhita", "303", "Theft",
            "Whoever commits theft shall be punished with imprisonment of either description for a term \
             which may extend to three years, or with fine, or with both; theft committed by persons in \
             the course of the same transaction on more than one occasion attracts a minimum term of \
             imprisonment of one year.",
            Domain::Criminal, 2023, true, true,
            "Imprisonment up to 3 years, or fine, or both"
        ),
        statute!(
            "bns-305", "BNS", "Bharatiya Nyaya Sanhita", "305", "Theft in a dwelling house",
            "Whoever commits theft in any building, tent or vessel, which building, tent or vessel is \
             used as a human dwelling, or used for the custody of property, shall be punished with \
             imprisonment of either description for a term which may extend to seven years, and shall \
             also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment up to 7 years, and fine"
        ),
        statute!(
            "bns-316-2", "BNS", "Bharatiya Nyaya Sanhita", "316", "Criminal breach of trust",
            "Whoever commits criminal breach of trust shall be punished with imprisonment of either \
             description for a term which may extend to five years, or with fine, or with both.",
            Domain::Criminal, 2023, true, true,
            "Imprisonment up to 5 years, or fine, or both"
        ),
        statute!(
            "bns-318-4", "BNS", "Bharatiya Nyaya Sanhita", "318", "Cheating",
            "Whoever cheats and thereby dishonestly induces the person deceived to deliver any property \
             to any person, or to make, alter or destroy the whole or any part of a valuable security, \
             shall be punished with imprisonment of either description for a term which may extend to \
             seven years, and shall also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment up to 7 years, and fine"
        ),
        statute!(
            "bns-85", "BNS", "Bharatiya Nyaya Sanhita", "85", "Husband or relative of husband subjecting a woman to cruelty",
            "Whoever, being the husband or the relative of the husband of a woman, subjects such woman to \
             cruelty shall be punished with imprisonment for a term which may extend to three years and \
             shall also be liable to fine.",
            Domain::Criminal, 2023, true, false,
            "Imprisonment up to 3 years, and fine"
        ),
        statute!(
            "bns-356", "BNS", "Bharatiya Nyaya Sanhita", "356", "Defamation",
            "Whoever, by words either spoken or intended to be read, or by signs or visible \
             representations, makes or publishes any imputation concerning any person intending to harm \
             the reputation of such person, defames that person, and shall be punished with simple \
             imprisonment for a term which may extend to two years, or with fine, or with both, or with \
             community service.",
            Domain::Criminal, 2023, false, true,
            "Simple imprisonment up to 2 years, fine, or community service"
        ),
        statute!(
            "bns-351-2", "BNS", "Bharatiya Nyaya Sanhita", "351", "Criminal intimidation",
            "Whoever commits the offence of criminal intimidation shall be punished with imprisonment of \
             either description for a term which may extend to two years, or with fine, or with both; if \
             the threat is to cause death or grievous hurt, the term may extend to seven years.",
            Domain::Criminal, 2023, false, true,
            "Imprisonment up to 2 years (7 for aggravated threats), or fine, or both"
        ),
        // Traffic domain (Motor Vehicles Act) — negligent driving
        statute!(
            "mva-184", "Motor Vehicles Act", "Motor Vehicles Act", "184", "Driving dangerously",
            "Whoever drives a motor vehicle at a speed or in a manner which is dangerous to the public, \
             having regard to all the circumstances of the case including the nature, condition and use \
             of the place where the vehicle is driven and the amount of traffic which actually is at the \
             time or which might reasonably be expected to be in the place, shall be punishable on first \
             conviction with imprisonment for a term which may extend to six months, or with fine.",
            Domain::Traffic, 1988, true, true,
            "Imprisonment up to 6 months or fine (first conviction); up to 2 years on subsequent conviction"
        ),
        statute!(
            "ipc-304a", "IPC", "Indian Penal Code", "304A", "Causing death by negligence",
            "Whoever causes the death of any person by doing any rash or negligent act not amounting to \
             culpable homicide, shall be punished with imprisonment of either description for a term which \
             may extend to two years, or with fine, or with both.",
            Domain::Traffic, 1860, true, true,
            "Imprisonment up to 2 years, or fine, or both"
        ),
        // Corporate domain (Companies Act)
        statute!(
            "companies-447", "Companies Act", "Companies Act, 2013", "447", "Punishment for fraud",
            "Without prejudice to any liability including repayment of any debt under this Act or any \
             other law for the time being in force, any person who is found to be guilty of fraud involving \
             an amount of at least ten lakh rupees or one per cent. of the turnover of the company, shall be \
             punishable with imprisonment for a term which shall not be less than six months but which may \
             extend to ten years.",
            Domain::Corporate, 2013, true, false,
            "Imprisonment 6 months to 10 years, and fine"
        ),
        // IT/Cyber domain
        statute!(
            "it-66c", "IT Act", "Information Technology Act, 2000", "66C", "Punishment for identity theft",
            "Whoever, fraudulently or dishonestly make use of the electronic signature, password or any \
             other unique identification feature of any other person, shall be punished with imprisonment \
             of either description for a term which may extend to three years and shall also be liable to \
             fine which may extend to rupees one lakh.",
            Domain::ItCyber, 2000, true, true,
            "Imprisonment up to 3 years, and fine up to Rs. 1,00,000"
        ),
    ]
});

pub static MAPPINGS: Lazy<Vec<Mapping>> = Lazy::new(|| {
    vec![
        Mapping {
            ipc_section: "302".into(),
            bns_section: "103".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 302 to BNS 103(1)".into()],
            punishment_changed: false,
            old_punishment: Some("Death or imprisonment for life, and fine".into()),
            new_punishment: Some("Death or imprisonment for life, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "304".into(),
            bns_section: "105".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 304 to BNS 105".into()],
            punishment_changed: false,
            old_punishment: Some("Imprisonment for life or up to 10 years, and fine".into()),
            new_punishment: Some("Imprisonment for life or up to 10 years, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "304B".into(),
            bns_section: "80".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 304B to BNS 80".into()],
            punishment_changed: false,
            old_punishment: Some("Minimum 7 years, up to imprisonment for life".into()),
            new_punishment: Some("Minimum 7 years, up to imprisonment for life".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "306".into(),
            bns_section: "108".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 306 to BNS 108".into()],
            punishment_changed: false,
            old_punishment: Some("Imprisonment up to 10 years, and fine".into()),
            new_punishment: Some("Imprisonment up to 10 years, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "307".into(),
            bns_section: "109".into(),
            mapping_type: MappingType::Modified,
            changes: vec![
                "Renumbered from IPC 307 to BNS 109".into(),
                "Organised-crime nexus clause added for repeat offenders".into(),
            ],
            punishment_changed: false,
            old_punishment: Some("Imprisonment up to 10 years, or life imprisonment if hurt is caused".into()),
            new_punishment: Some("Imprisonment up to 10 years, or life imprisonment if hurt is caused".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "323".into(),
            bns_section: "115".into(),
            mapping_type: MappingType::Modified,
            changes: vec![
                "Renumbered from IPC 323 to BNS 115(2)".into(),
                "Maximum fine raised from Rs. 1,000 to Rs. 10,000".into(),
            ],
            punishment_changed: true,
            old_punishment: Some("Imprisonment up to 1 year, or fine up to Rs. 1,000, or both".into()),
            new_punishment: Some("Imprisonment up to 1 year, or fine up to Rs. 10,000, or both".into()),
            punishment_increased: true,
        },
        Mapping {
            ipc_section: "354".into(),
            bns_section: "74".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 354 to BNS 74".into()],
            punishment_changed: false,
            old_punishment: Some("Imprisonment 1 to 5 years, and fine".into()),
            new_punishment: Some("Imprisonment 1 to 5 years, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "376".into(),
            bns_section: "64".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 376 to BNS 64".into()],
            punishment_changed: false,
            old_punishment: Some("Rigorous imprisonment 10 years to life, and fine".into()),
            new_punishment: Some("Rigorous imprisonment 10 years to life, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "379".into(),
            bns_section: "303".into(),
            mapping_type: MappingType::Modified,
            changes: vec![
                "Renumbered from IPC 379 to BNS 303(2)".into(),
                "Minimum one-year term added for repeat theft in the same transaction".into(),
            ],
            punishment_changed: true,
            old_punishment: Some("Imprisonment up to 3 years, or fine, or both".into()),
            new_punishment: Some("Imprisonment up to 3 years (minimum 1 year for repeat offences), or fine, or both".into()),
            punishment_increased: true,
        },
        Mapping {
            ipc_section: "380".into(),
            bns_section: "305".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 380 to BNS 305".into()],
            punishment_changed: false,
            old_punishment: Some("Imprisonment up to 7 years, and fine".into()),
            new_punishment: Some("Imprisonment up to 7 years, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "406".into(),
            bns_section: "316".into(),
            mapping_type: MappingType::Modified,
            changes: vec![
                "Renumbered from IPC 406 to BNS 316(2)".into(),
                "Maximum term raised from 3 to 5 years".into(),
            ],
            punishment_changed: true,
            old_punishment: Some("Imprisonment up to 3 years, or fine, or both".into()),
            new_punishment: Some("Imprisonment up to 5 years, or fine, or both".into()),
            punishment_increased: true,
        },
        Mapping {
            ipc_section: "420".into(),
            bns_section: "318".into(),
            mapping_type: MappingType::Merged,
            changes: vec![
                "IPC 415/420 cheating provisions consolidated into BNS 318".into(),
                "Renumbered from IPC 420 to BNS 318(4)".into(),
            ],
            punishment_changed: false,
            old_punishment: Some("Imprisonment up to 7 years, and fine".into()),
            new_punishment: Some("Imprisonment up to 7 years, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "498A".into(),
            bns_section: "85".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 498A to BNS 85".into()],
            punishment_changed: false,
            old_punishment: Some("Imprisonment up to 3 years, and fine".into()),
            new_punishment: Some("Imprisonment up to 3 years, and fine".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "499".into(),
            bns_section: "356".into(),
            mapping_type: MappingType::Merged,
            changes: vec!["IPC 499/500 defamation provisions consolidated into BNS 356".into()],
            punishment_changed: false,
            old_punishment: Some("Simple imprisonment up to 2 years, or fine, or both".into()),
            new_punishment: Some("Simple imprisonment up to 2 years, fine, or community service".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "500".into(),
            bns_section: "356".into(),
            mapping_type: MappingType::Merged,
            changes: vec![
                "IPC 499/500 defamation provisions consolidated into BNS 356".into(),
                "Community service added as an alternative sentence".into(),
            ],
            punishment_changed: true,
            old_punishment: Some("Simple imprisonment up to 2 years, or fine, or both".into()),
            new_punishment: Some("Simple imprisonment up to 2 years, fine, or community service".into()),
            punishment_increased: false,
        },
        Mapping {
            ipc_section: "506".into(),
            bns_section: "351".into(),
            mapping_type: MappingType::Exact,
            changes: vec!["Renumbered from IPC 506 to BNS 351(2)".into()],
            punishment_changed: false,
            old_punishment: Some("Imprisonment up to 2 years (7 for aggravated threats), or fine, or both".into()),
            new_punishment: Some("Imprisonment up to 2 years (7 for aggravated threats), or fine, or both".into()),
            punishment_increased: false,
        },
    ]
});

macro_rules! case {
    ($id:expr, $name:expr, $court:expr, $court_name:expr, $citation:expr, $year:expr, $summary:expr, $holdings:expr, $landmark:expr, $domain:expr, $url:expr, $sections:expr) => {
        Case {
            id: $id.to_string(),
            case_name: $name.to_string(),
            court: $court.to_string(),
            court_name: $court_name.to_string(),
            citation_string: Some($citation.to_string()),
            reporting_year: Some($year),
            summary: $summary.to_string(),
            key_holdings: $holdings.into_iter().map(|s: &str| s.to_string()).collect(),
            is_landmark: $landmark,
            domain: $domain,
            source_url: $url,
            cited_sections: $sections.into_iter().map(|s: &str| s.to_string()).collect(),
        }
    };
}

pub static CASES: Lazy<Vec<Case>> = Lazy::new(|| {
    vec![
        case!(
            "case-bachan-singh",
            "Bachan Singh v. State of Punjab",
            "supreme_court",
            "Supreme Court of India",
            "(1980) 2 SCC 684",
            1980,
            "Laid down the 'rarest of rare' doctrine governing when a death sentence may be imposed for \
             murder under section 302, holding that life imprisonment is the rule and death the exception.",
            vec![
                "Death sentence reserved for the rarest of rare cases",
                "Courts must record special reasons under section 354(3) CrPC before imposing death",
            ],
            true,
            Domain::Criminal,
            Some("https://indiankanoon.org/doc/1376922/".to_string()),
            vec!["302"]
        ),
        case!(
            "case-machhi-singh",
            "Machhi Singh v. State of Punjab",
            "supreme_court",
            "Supreme Court of India",
            "(1983) 3 SCC 470",
            1983,
            "Elaborated the Bachan Singh balancing test into concrete categories of cases warranting the \
             death penalty for murder under section 302.",
            vec!["Crystallised aggravating and mitigating circumstances for sentencing in murder trials"],
            true,
            Domain::Criminal,
            Some("https://indiankanoon.org/doc/1203693/".to_string()),
            vec!["302"]
        ),
        case!(
            "case-arnesh-kumar",
            "Arnesh Kumar v. State of Bihar",
            "supreme_court",
            "Supreme Court of India",
            "(2014) 8 SCC 273",
            2014,
            "Held that arrest under section 498A IPC for cruelty to a married woman must not be automatic \
             and directed police to apply the section 41 CrPC checklist before arresting.",
            vec![
                "No automatic arrest merely on registration of a section 498A complaint",
                "Police must record reasons for arrest or for not arresting under section 41(1)(b) CrPC",
            ],
            true,
            Domain::Criminal,
            Some("https://indiankanoon.org/doc/187264651/".to_string()),
            vec!["498A"]
        ),
        case!(
            "case-lalita-kumari",
            "Lalita Kumari v. Government of Uttar Pradesh",
            "supreme_court",
            "Supreme Court of India",
            "(2014) 2 SCC 1",
            2014,
            "Held that registration of an FIR is mandatory under section 154 CrPC if the information \
             discloses a cognizable offence, and no preliminary inquiry is permissible in such cases.",
            vec!["FIR registration is mandatory for cognizable offences", "Preliminary inquiry limited to specified categories"],
            true,
            Domain::Criminal,
            Some("https://indiankanoon.org/doc/10239808/".to_string()),
            vec![]
        ),
        case!(
            "case-state-vs-jogendra",
            "State of Punjab v. Jogendra Singh",
            "high_court",
            "Punjab and Haryana High Court",
            "1991 CriLJ 1403",
            1991,
            "Convicted the accused under section 307 IPC for firing at the complainant with intent to \
             kill, holding that the nature of the injury and the weapon used established the requisite \
             intention.",
            vec!["Intention under section 307 can be inferred from the weapon and manner of attack"],
            false,
            Domain::Criminal,
            None,
            vec!["307"]
        ),
        case!(
            "case-pyare-lal",
            "Pyare Lal Bhargava v. State of Rajasthan",
            "supreme_court",
            "Supreme Court of India",
            "AIR 1963 SC 1094",
            1963,
            "Held that temporary removal of a file from government custody with dishonest intent amounts \
             to theft under section 379 IPC even though the file was later returned.",
            vec!["Dishonest intention at the time of taking is sufficient for theft, even if the property is later returned"],
            true,
            Domain::Criminal,
            Some("https://indiankanoon.org/doc/1631235/".to_string()),
            vec!["379"]
        ),
        case!(
            "case-hira-lal",
            "Hira Lal v. State",
            "high_court",
            "Delhi High Court",
            "2001 CriLJ 2212",
            2001,
            "Upheld a conviction under section 420 IPC for inducing the complainant to part with money on \
             a false representation of being able to secure a government job.",
            vec!["Dishonest inducement coupled with delivery of property satisfies section 420"],
            false,
            Domain::Criminal,
            None,
            vec!["420"]
        ),
        case!(
            "case-national-insurance-nicolletta",
            "National Insurance Co. Ltd. v. Pranay Sethi",
            "supreme_court",
            "Supreme Court of India",
            "(2017) 16 SCC 680",
            2017,
            "Laid down a uniform formula for computing 'just compensation' in motor accident claims, \
             including future prospects and multiplier-based methods.",
            vec!["Standardised multiplier method for future prospects in MACT compensation claims"],
            true,
            Domain::Traffic,
            Some("https://indiankanoon.org/doc/170083862/".to_string()),
            vec![]
        ),
        case!(
            "case-sfio-vs-rahul",
            "Serious Fraud Investigation Office v. Rahul Modi",
            "supreme_court",
            "Supreme Court of India",
            "(2019) 5 SCC 266",
            2019,
            "Clarified the scope of section 447 of the Companies Act, 2013 on fraud and the interplay \
             between SFIO investigations and parallel criminal proceedings.",
            vec!["SFIO investigation under the Companies Act can proceed independent of other criminal proceedings"],
            true,
            Domain::Corporate,
            Some("https://indiankanoon.org/doc/109927090/".to_string()),
            vec!["447"]
        ),
        case!(
            "case-shreya-singhal",
            "Shreya Singhal v. Union of India",
            "supreme_court",
            "Supreme Court of India",
            "(2015) 5 SCC 1",
            2015,
            "Struck down section 66A of the Information Technology Act, 2000 as unconstitutionally vague \
             and violative of the freedom of speech guaranteed under Article 19(1)(a).",
            vec!["Section 66A IT Act struck down as unconstitutional", "Vague penal provisions restricting free speech are void"],
            true,
            Domain::ItCyber,
            Some("https://indiankanoon.org/doc/110813550/".to_string()),
            vec!["66A"]
        ),
    ]
});
