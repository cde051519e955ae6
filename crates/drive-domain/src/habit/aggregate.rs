use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HexColor;
use crate::shared::{DomainError, HabitId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    category: String,
    icon: String,
    color: HexColor,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// Partial update applied by the edit form. `description: Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct HabitChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub color: Option<HexColor>,
    pub description: Option<Option<String>>,
}

impl Habit {
    pub const MAX_NAME_LEN: usize = 100;
    pub const MAX_CATEGORY_LEN: usize = 100;
    pub const MAX_ICON_LEN: usize = 50;
    pub const MAX_DESCRIPTION_LEN: usize = 1000;

    pub fn new(
        user_id: UserId,
        name: String,
        category: String,
        icon: String,
        color: HexColor,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: HabitId::new(),
            user_id,
            name: required_text("Habit name", &name, Self::MAX_NAME_LEN)?,
            category: required_text("Category", &category, Self::MAX_CATEGORY_LEN)?,
            icon: required_text("Icon", &icon, Self::MAX_ICON_LEN)?,
            color,
            description: optional_text(description)?,
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        user_id: UserId,
        name: String,
        category: String,
        icon: String,
        color: HexColor,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            category,
            icon,
            color,
            description,
            created_at,
        }
    }

    /// Apply an edit. Either every change is valid and applied, or none is.
    pub fn apply(&mut self, changes: HabitChanges) -> Result<(), DomainError> {
        let name = changes
            .name
            .map(|n| required_text("Habit name", &n, Self::MAX_NAME_LEN))
            .transpose()?;
        let category = changes
            .category
            .map(|c| required_text("Category", &c, Self::MAX_CATEGORY_LEN))
            .transpose()?;
        let icon = changes
            .icon
            .map(|i| required_text("Icon", &i, Self::MAX_ICON_LEN))
            .transpose()?;
        let description = changes.description.map(optional_text).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(icon) = icon {
            self.icon = icon;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
        if let Some(description) = description {
            self.description = description;
        }

        Ok(())
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{} cannot be empty", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(DomainError::Validation(format!(
            "{} cannot exceed {} characters",
            field, max_len
        )));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Result<Option<String>, DomainError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.chars().count() > Habit::MAX_DESCRIPTION_LEN => {
            Err(DomainError::Validation(format!(
                "Description cannot exceed {} characters",
                Habit::MAX_DESCRIPTION_LEN
            )))
        }
        Some(text) => Ok(Some(text.to_string())),
    }
}
