use email_normalizer::{count_unique, dedup, normalize_email, NormalizationPolicy, Normalizer};

#[test_log::test]
fn basic_email_format() {
    assert_eq!(count_unique(["test@example.com"]).unwrap(), 1);
    assert_eq!(count_unique(["a@b.com"]).unwrap(), 1);
}

#[test_log::test]
fn empty_batch() {
    assert_eq!(count_unique(Vec::<String>::new()).unwrap(), 0);
}

#[test_log::test]
fn dots_in_local_name() {
    let emails = ["test.email@example.com", "testemail@example.com"];
    assert_eq!(count_unique(emails).unwrap(), 1);
}

#[test_log::test]
fn plus_in_local_name() {
    let emails = ["test+spam@example.com", "test@example.com"];
    assert_eq!(count_unique(emails).unwrap(), 1);
}

#[test_log::test]
fn combined_dots_and_plus() {
    let emails = ["test.email+spam@example.com", "testemail@example.com"];
    assert_eq!(count_unique(emails).unwrap(), 1);
}

#[test_log::test]
fn different_domains_stay_distinct() {
    let emails = [
        "test.email+spam@example.com",
        "test.email+spam@other.com",
        "different@example.com",
    ];
    assert_eq!(count_unique(emails).unwrap(), 3);
}

#[test_log::test]
fn leetcode_example() {
    let emails = [
        "alice.z@leetcode.com",
        "alicez@leetcode.com",
        "m.y+name@email.com",
        "my@email.com",
    ];
    assert_eq!(count_unique(emails).unwrap(), 2);
}

#[test_log::test]
fn count_is_independent_of_order() {
    let emails = vec![
        "test.email+alex@leetcode.com",
        "test.e.mail+bob.cathy@leetcode.com",
        "testemail+david@lee.tcode.com",
        "a@leetcode.com",
        "b@leetcode.com",
        "a.@leetcode.com",
    ];
    let expected = count_unique(&emails).unwrap();
    assert_eq!(expected, 4);

    let mut reversed = emails.clone();
    reversed.reverse();
    assert_eq!(count_unique(&reversed).unwrap(), expected);

    for shift in 1..emails.len() {
        let mut rotated = emails.clone();
        rotated.rotate_left(shift);
        assert_eq!(count_unique(&rotated).unwrap(), expected);
    }
}

#[test_log::test]
fn normalization_is_idempotent() {
    for raw in [
        "test.email+spam@example.com",
        "m.y+name@email.com",
        "...@x.com",
        "+only@x.com",
        "plain@x.com",
    ] {
        let once = normalize_email(raw).unwrap();
        let twice = normalize_email(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test_log::test]
fn report_agrees_with_count() {
    let emails = [
        "alice.z@leetcode.com",
        "alicez@leetcode.com",
        "m.y+name@email.com",
        "my@email.com",
        "other@email.com",
    ];
    let report = dedup(emails).unwrap();
    assert_eq!(report.unique_count(), count_unique(emails).unwrap());
    assert_eq!(report.total, report.unique_count() + report.duplicate_count());
}

#[test_log::test]
fn report_serializes_as_json_map() {
    let report = dedup(["m.y+name@email.com", "my@email.com"]).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "total": 2,
            "addresses": { "my@email.com": ["m.y+name@email.com", "my@email.com"] }
        })
    );
}

#[test_log::test]
fn gmail_only_dot_rule() {
    let normalizer = Normalizer::new(NormalizationPolicy {
        dot_domains: Some(vec!["gmail.com".into()]),
        lowercase: true,
        ..Default::default()
    });
    let emails = ["John.Doe@gmail.com", "johndoe+x@gmail.com", "john.doe@example.com", "johndoe@example.com"];
    assert_eq!(normalizer.count_unique(emails).unwrap(), 3);
}

#[test_log::test]
fn normalizer_is_shareable_across_threads() {
    let normalizer = std::sync::Arc::new(Normalizer::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let normalizer = normalizer.clone();
            std::thread::spawn(move || {
                let emails: Vec<String> = (0..=i).map(|j| format!("u.s.e.r{j}+t{i}@x.com")).collect();
                normalizer.count_unique(&emails).unwrap()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![1, 2, 3, 4]);
}
