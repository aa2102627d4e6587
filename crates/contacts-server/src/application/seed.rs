//! Sample contacts for an empty store

use contacts::Contact;

fn sample(first: &str, last: &str, handle: Option<&str>, notes: Option<&str>) -> Contact {
    Contact::new(
        Some(first.to_string()),
        Some(last.to_string()),
        None,
        handle.map(str::to_string),
        notes.map(str::to_string),
    )
}

pub fn sample_contacts() -> Vec<Contact> {
    vec![
        sample(
            "Ada",
            "Lovelace",
            None,
            Some("Published the first algorithm intended for a machine."),
        ),
        sample("Grace", "Hopper", None, Some("Found an actual bug.")),
        sample("Alan", "Turing", None, None),
        sample("Katherine", "Johnson", None, Some("Checked the orbital maths.")),
        Contact::new(None, None, None, None, None),
    ]
}
