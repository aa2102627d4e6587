//! Contact View - presentation rules for the contact page
//!
//! Turns a record into an ordered list of rendering instructions so the
//! conditional parts (name placeholder, handle link, notes) can be tested
//! without any rendering layer.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Contact;
use crate::domain::value_objects::{DisplayName, Favourite};

use super::DELETE_CONFIRMATION_PROMPT;

/// Base URL for external handle links
pub const HANDLE_BASE_URL: &str = "https://x.com/";

/// Relative route for the edit form
pub const EDIT_ROUTE: &str = "edit";

/// Relative route for deletion
pub const DESTROY_ROUTE: &str = "destroy";

/// Favourite control state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavouriteButton {
    /// Accessible label
    pub label: String,
    pub glyph: String,
    /// Value submitted in the `favourite` field when activated
    pub submit_value: String,
}

impl FavouriteButton {
    pub fn for_state(favourite: Favourite) -> Self {
        let (label, glyph) = if favourite.is_set() {
            ("Remove from favourites", "★")
        } else {
            ("Add to favourites", "☆")
        };

        Self {
            label: label.to_string(),
            glyph: glyph.to_string(),
            submit_value: favourite.toggled().as_form_value().to_string(),
        }
    }
}

/// One rendering instruction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum ViewBlock {
    Avatar {
        src: Option<String>,
        alt: String,
    },
    Name {
        name: DisplayName,
    },
    Favourite {
        button: FavouriteButton,
    },
    Handle {
        text: String,
        href: String,
    },
    Notes {
        text: String,
    },
    Actions {
        edit: String,
        destroy: String,
        confirm_prompt: String,
    },
}

/// Rendering instructions for a whole contact page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactView {
    pub blocks: Vec<ViewBlock>,
}

impl ContactView {
    pub fn display_name(&self) -> Option<&DisplayName> {
        self.blocks.iter().find_map(|block| match block {
            ViewBlock::Name { name } => Some(name),
            _ => None,
        })
    }

    pub fn favourite_button(&self) -> Option<&FavouriteButton> {
        self.blocks.iter().find_map(|block| match block {
            ViewBlock::Favourite { button } => Some(button),
            _ => None,
        })
    }
}

/// Build the rendering instructions for a contact
pub fn render_contact(contact: &Contact) -> ContactView {
    let first = contact.first.as_deref().unwrap_or_default();
    let last = contact.last.as_deref().unwrap_or_default();

    let mut blocks = vec![
        ViewBlock::Avatar {
            src: contact.avatar.clone(),
            alt: format!("{} {} avatar", first, last),
        },
        ViewBlock::Name {
            name: contact.display_name(),
        },
        ViewBlock::Favourite {
            button: FavouriteButton::for_state(Favourite::from(contact.favourite)),
        },
    ];

    if let Some(handle) = contact.handle.as_deref().filter(|h| !h.is_empty()) {
        blocks.push(ViewBlock::Handle {
            text: handle.to_string(),
            href: format!("{}{}", HANDLE_BASE_URL, handle),
        });
    }

    if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
        blocks.push(ViewBlock::Notes {
            text: notes.to_string(),
        });
    }

    blocks.push(ViewBlock::Actions {
        edit: EDIT_ROUTE.to_string(),
        destroy: DESTROY_ROUTE.to_string(),
        confirm_prompt: DELETE_CONFIRMATION_PROMPT.to_string(),
    });

    ContactView { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str) -> Contact {
        Contact::new(
            Some(first.to_string()),
            Some(last.to_string()),
            Some("https://example.com/a.png".to_string()),
            None,
            None,
        )
    }

    fn kinds(view: &ContactView) -> Vec<&'static str> {
        view.blocks
            .iter()
            .map(|b| match b {
                ViewBlock::Avatar { .. } => "avatar",
                ViewBlock::Name { .. } => "name",
                ViewBlock::Favourite { .. } => "favourite",
                ViewBlock::Handle { .. } => "handle",
                ViewBlock::Notes { .. } => "notes",
                ViewBlock::Actions { .. } => "actions",
            })
            .collect()
    }

    #[test]
    fn test_minimal_contact_renders_required_blocks_only() {
        let view = render_contact(&contact("", ""));
        assert_eq!(kinds(&view), vec!["avatar", "name", "favourite", "actions"]);
        assert_eq!(view.display_name(), Some(&DisplayName::NoName));
    }

    #[test]
    fn test_named_contact() {
        let view = render_contact(&contact("Grace", "Hopper"));
        assert_eq!(
            view.display_name(),
            Some(&DisplayName::Named("Grace Hopper".to_string()))
        );
        assert_eq!(
            view.blocks[0],
            ViewBlock::Avatar {
                src: Some("https://example.com/a.png".to_string()),
                alt: "Grace Hopper avatar".to_string(),
            }
        );
    }

    #[test]
    fn test_favourite_button_depends_only_on_flag() {
        let mut c = contact("Grace", "Hopper");

        let button = render_contact(&c).favourite_button().cloned().unwrap();
        assert_eq!(button.label, "Add to favourites");
        assert_eq!(button.glyph, "☆");
        assert_eq!(button.submit_value, "true");

        c.favourite = true;
        let button = render_contact(&c).favourite_button().cloned().unwrap();
        assert_eq!(button.label, "Remove from favourites");
        assert_eq!(button.glyph, "★");
        assert_eq!(button.submit_value, "false");
    }

    #[test]
    fn test_handle_and_notes_only_when_non_empty() {
        let mut c = contact("Grace", "Hopper");
        c.handle = Some(String::new());
        c.notes = Some(String::new());
        assert_eq!(kinds(&render_contact(&c)), vec!["avatar", "name", "favourite", "actions"]);

        c.handle = Some("grace".to_string());
        c.notes = Some("COBOL".to_string());
        let view = render_contact(&c);
        assert_eq!(
            kinds(&view),
            vec!["avatar", "name", "favourite", "handle", "notes", "actions"]
        );
        assert!(view.blocks.contains(&ViewBlock::Handle {
            text: "grace".to_string(),
            href: "https://x.com/grace".to_string(),
        }));
    }

    #[test]
    fn test_actions_carry_confirmation_prompt() {
        let view = render_contact(&contact("Grace", "Hopper"));
        match view.blocks.last() {
            Some(ViewBlock::Actions {
                edit,
                destroy,
                confirm_prompt,
            }) => {
                assert_eq!(edit, "edit");
                assert_eq!(destroy, "destroy");
                assert_eq!(confirm_prompt, "Are you sure you want to delete this record?");
            }
            other => panic!("expected actions block, got {:?}", other),
        }
    }

    #[test]
    fn test_blocks_serialize_with_tag() {
        let json = serde_json::to_value(render_contact(&contact("", ""))).unwrap();
        assert_eq!(json["blocks"][1]["block"], "name");
        assert_eq!(json["blocks"][1]["name"]["kind"], "no_name");
    }
}
