//! The vi-VN and en-US Fluent catalogs must stay interchangeable: same
//! message ids, no duplicates, and the same `{ $var }` arguments per message,
//! so a runtime language switch never falls back or drops an argument.

use std::collections::{BTreeMap, BTreeSet};

const VI_VN: &str = include_str!("../i18n/vi-VN/taynguyen-ui.ftl");
const EN_US: &str = include_str!("../i18n/en-US/taynguyen-ui.ftl");

/// Message id -> pattern text. Only single-line messages are used here;
/// indented continuation lines are folded into the previous message.
fn messages(locale: &str, src: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let mut last: Option<String> = None;
    for line in src.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        if line.starts_with(char::is_whitespace) {
            if let Some(id) = &last {
                out.entry(id.clone())
                    .and_modify(|v: &mut String| v.push_str(line.trim()));
            }
            continue;
        }
        let Some((id, pattern)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim().to_string();
        assert!(
            out.insert(id.clone(), pattern.trim().to_string()).is_none(),
            "{locale} defines `{id}` twice"
        );
        last = Some(id);
    }
    out
}

/// Names of the `$variables` referenced by a pattern.
fn arguments(pattern: &str) -> BTreeSet<&str> {
    pattern
        .split('$')
        .skip(1)
        .map(|rest| {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(rest.len());
            &rest[..end]
        })
        .collect()
}

#[test]
fn locales_define_the_same_message_ids() {
    let vi = messages("vi-VN", VI_VN);
    let en = messages("en-US", EN_US);
    assert!(!vi.is_empty());

    let vi_ids: BTreeSet<_> = vi.keys().collect();
    let en_ids: BTreeSet<_> = en.keys().collect();
    let missing: Vec<_> = vi_ids.difference(&en_ids).collect();
    let extra: Vec<_> = en_ids.difference(&vi_ids).collect();
    assert!(missing.is_empty(), "en-US lacks {missing:?}");
    assert!(extra.is_empty(), "en-US defines ids vi-VN lacks: {extra:?}");
}

#[test]
fn locales_take_the_same_arguments() {
    let vi = messages("vi-VN", VI_VN);
    let en = messages("en-US", EN_US);
    for (id, vi_pattern) in &vi {
        let Some(en_pattern) = en.get(id) else {
            continue;
        };
        assert_eq!(
            arguments(vi_pattern),
            arguments(en_pattern),
            "`{id}` arguments differ between vi-VN and en-US"
        );
    }
}

#[test]
fn copyright_takes_the_year_in_both_locales() {
    for (locale, src) in [("vi-VN", VI_VN), ("en-US", EN_US)] {
        let catalog = messages(locale, src);
        let copyright = catalog
            .get("footer-copyright")
            .unwrap_or_else(|| panic!("{locale} has no footer-copyright"));
        assert_eq!(
            arguments(copyright),
            BTreeSet::from(["year"]),
            "{locale}: {copyright}"
        );
    }
}

#[test]
fn visible_copy_is_translated() {
    let vi = messages("vi-VN", VI_VN);
    let en = messages("en-US", EN_US);
    for id in ["nav-home", "hero-title-lead", "products-title", "cta-subscribe"] {
        assert_ne!(vi.get(id), en.get(id), "`{id}` is identical in both locales");
    }
    assert_eq!(en.get("hero-title-lead").map(String::as_str), Some("The Essence Of"));
}
