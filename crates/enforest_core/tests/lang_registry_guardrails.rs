use std::collections::HashMap;

use enforest_core::lang::keywords::{self, KeywordCategory};
use enforest_core::lang::operators;
use enforest_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {}",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn every_opener_has_a_registered_closer() {
    for info in punctuation::PUNCTUATION {
        if punctuation::is_opener(info.id) {
            let closer = punctuation::closer_for(info.id)
                .unwrap_or_else(|| panic!("opener {:?} has no closer", info.id));
            assert!(punctuation::is_closer(closer));
            assert_eq!(punctuation::category(closer), punctuation::PunctuationCategory::Delimiter);
        }
    }
}

#[test]
fn operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_spelled_operators_are_registered_operator_keywords() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
        let kw = keywords::from_str(info.spelling)
            .unwrap_or_else(|| panic!("word operator {:?} is not a keyword", info.spelling));
        assert_eq!(keywords::category(kw), KeywordCategory::Operator);
        assert_eq!(operators::from_keyword(kw), Some(info.id));
    }

    for info in keywords::KEYWORDS.iter().filter(|k| k.category == KeywordCategory::Operator) {
        assert!(
            operators::from_keyword(info.id).is_some(),
            "operator keyword {:?} has no operator entry",
            info.canonical
        );
    }
}

#[test]
fn operator_tables_reference_registered_operators_once() {
    let mut infix_seen = HashMap::new();
    for info in operators::INFIX_OPERATORS {
        // `info_for` panics on unregistered ids.
        let _ = operators::info_for(info.id);
        assert!(
            infix_seen.insert(info.id, info.precedence).is_none(),
            "infix operator {:?} listed twice",
            info.id
        );
        assert!(info.precedence > 0, "precedence 0 is reserved for the reduction sentinel");
    }

    for &id in operators::PREFIX_OPERATORS.iter().chain(operators::ASSIGNMENT_OPERATORS) {
        let _ = operators::info_for(id);
    }

    for &id in operators::ASSIGNMENT_OPERATORS {
        assert!(
            operators::infix_info(id).is_none() && !operators::is_prefix(id),
            "assignment operator {:?} must not double as a prefix/infix operator",
            id
        );
    }
}
