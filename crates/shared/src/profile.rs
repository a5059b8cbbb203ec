use serde::{Deserialize, Deserializer, Serialize};

/// Free-text survey answers as stored on a user's profile.
///
/// Older clients saved these fields as arrays of chips, newer ones as plain
/// text; both shapes are accepted and lists are joined with commas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(
        default,
        alias = "allergens",
        deserialize_with = "text_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub allergies: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub intolerances: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub avoid: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl Survey {
    /// The answered fields, in `allergies, intolerances, avoid, notes` order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            self.allergies.as_deref(),
            self.intolerances.as_deref(),
            self.avoid.as_deref(),
            self.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|value| !value.trim().is_empty())
    }
}

fn text_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrList {
        Text(String),
        List(Vec<String>),
    }

    Ok(
        Option::<TextOrList>::deserialize(deserializer)?.map(|value| match value {
            TextOrList::Text(text) => text,
            TextOrList::List(items) => items.join(","),
        }),
    )
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<Survey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
}

impl Profile {
    pub fn is_vegan(&self) -> bool {
        self.diet
            .as_deref()
            .is_some_and(|diet| diet.trim().eq_ignore_ascii_case("vegan"))
    }
}
