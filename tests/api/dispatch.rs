use newsletter_dispatch::domain::UserRecord;
use newsletter_dispatch::startup::Application;
use newsletter_dispatch::user_source::{FixtureUserSource, UserSource};

use crate::helpers::{spawn_newsletter, user};

fn missing(notification: &str, field: &str) -> String {
    format!(
        "Unable to send {} failed with message 'Invalid object: missing required field `{}`'",
        notification, field
    )
}

fn malformed(notification: &str, field: &str) -> String {
    format!(
        "Unable to send {} failed with message 'Invalid object: malformed `{}` value'",
        notification, field
    )
}

fn duplicate(notification: &str, field: &str) -> String {
    format!(
        "Unable to send {} failed with message 'Invalid object: duplicate `{}` value'",
        notification, field
    )
}

#[test]
fn the_sample_batch_produces_the_expected_report() {
    let users = FixtureUserSource.get_users().unwrap();
    let mut app = spawn_newsletter(users);

    app.send();

    let expected = vec![
        // Ivan
        "Email ivan@test.com has been sent to user Ivan".to_string(),
        "Push notification has been sent to user Ivan with device_id B0-5A-7B-0B-32-BD"
            .to_string(),
        // Peter
        "Email peter@test.com has been sent to user Peter".to_string(),
        missing("Push", "device_id"),
        // Mark
        missing("Email", "email"),
        duplicate("Push", "device_id"),
        // Nina
        malformed("Email", "email"),
        missing("Push", "device_id"),
        // Luke
        missing("Email", "email"),
        malformed("Push", "device_id"),
        // Zerg
        missing("Email", "email"),
        malformed("Push", "device_id"),
        // unnamed
        missing("Email", "name"),
        missing("Push", "name"),
    ];
    assert_eq!(app.outcome_lines(), expected);
}

#[test]
fn every_failure_line_is_followed_by_the_record_dump() {
    let mut app = spawn_newsletter(vec![user("Mark").with_device_id("B0-5A-7B-0B-32-BD")]);

    app.send();

    assert_eq!(
        app.output(),
        "Unable to send Email failed with message \
         'Invalid object: missing required field `email`'\n\
         {\n  \"name\": \"Mark\",\n  \"device_id\": \"B0-5A-7B-0B-32-BD\"\n}\n\
         Push notification has been sent to user Mark with device_id B0-5A-7B-0B-32-BD\n"
    );
}

#[test]
fn a_failing_user_does_not_stop_the_batch() {
    let mut app = spawn_newsletter(vec![
        UserRecord::default(),
        user("Nina").with_email("..."),
        user("Peter").with_email("peter@test.com"),
    ]);

    app.send();

    let outcomes = app.outcome_lines();
    assert_eq!(outcomes.len(), 6);
    assert_eq!(
        outcomes[4],
        "Email peter@test.com has been sent to user Peter"
    );
}

#[test]
fn records_missing_a_channel_field_fail_that_channel() {
    let test_cases = vec![
        (user("Peter").with_email("peter@test.com"), "Push", "device_id"),
        (user("Mark").with_device_id("AA-BB-CC-DD-EE-FF"), "Email", "email"),
        (
            UserRecord::default()
                .with_email("qwe@test.com")
                .with_device_id("AA-BB-CC-DD-EE-FF"),
            "Email",
            "name",
        ),
    ];

    for (record, notification, field) in test_cases {
        let mut app = spawn_newsletter(vec![record.clone()]);

        app.send();

        assert!(
            app.outcome_lines().contains(&missing(notification, field)),
            "{} did not fail on missing `{}` for {:?}.",
            notification,
            field,
            record
        );
    }
}

#[test]
fn dispatching_twice_rejects_everything_that_passed_the_first_time() {
    let mut app = spawn_newsletter(vec![user("Ivan")
        .with_email("ivan@test.com")
        .with_device_id("B0-5A-7B-0B-32-BD")]);

    app.send();
    app.send();

    assert_eq!(
        app.outcome_lines(),
        vec![
            "Email ivan@test.com has been sent to user Ivan".to_string(),
            "Push notification has been sent to user Ivan with device_id B0-5A-7B-0B-32-BD"
                .to_string(),
            duplicate("Email", "email"),
            duplicate("Push", "device_id"),
        ]
    );
}

#[test]
fn a_fresh_application_starts_a_fresh_uniqueness_scope() {
    let first = Application::build_with_source(&FixtureUserSource, Vec::<u8>::new())
        .unwrap()
        .run_until_complete();
    let second = Application::build_with_source(&FixtureUserSource, Vec::<u8>::new())
        .unwrap()
        .run_until_complete();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
