use serde_json::{json, Value};

/// Signup body for the first test account.
pub fn signup_user1() -> Value {
    json!({
        "email": "foo@bar.com",
        "password": "foobar",
        "name": "Mr. Foo Bar"
    })
}

/// Signup body for the second test account.
pub fn signup_user2() -> Value {
    json!({
        "email": "bar@foo.com",
        "password": "barfoo",
        "name": "Mrs. Bar Foo"
    })
}

/// Login body matching [`signup_user1`].
pub fn login_user1() -> Value {
    json!({
        "email": "foo@bar.com",
        "password": "foobar"
    })
}

/// Profile body with every optional field filled in.
pub fn profile() -> Value {
    json!({
        "activities": "basketball",
        "bio": "this is me",
        "demographic": "adult",
        "location": "Portland",
        "image": "image link"
    })
}

/// Group body captained by `captain` with the given members.
pub fn group(captain: &str, members: &[&str]) -> Value {
    json!({
        "teamName": "Sneaky Sneks",
        "type": "basketball",
        "description": "3 on 3",
        "private": false,
        "captains": [captain],
        "members": members
    })
}

/// Event body hosted by `host`.
pub fn event(host: &str) -> Value {
    json!({
        "name": "Pickup game",
        "description": "casual",
        "type": "basketball",
        "time": {
            "start": "2026-11-01T18:00:00.000Z",
            "end": "2026-11-01T20:00:00.000Z"
        },
        "location": "Portland",
        "host": [host],
        "group": [],
        "attendance": []
    })
}
