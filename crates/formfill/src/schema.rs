//! Data model for form layouts and patient records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of fields a prescription form can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Age,
    Sex,
    Disease,
    Date,
}

impl Field {
    /// All fields, in drawing order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Age,
        Field::Sex,
        Field::Disease,
        Field::Date,
    ];

    /// The lowercase name used in layout and record JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Disease => "disease",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-left anchor of a field on the template, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// One patient record; absent fields are simply not drawn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record::default()
    }

    /// Get the value of a field, if present
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Age => self.age.as_deref(),
            Field::Sex => self.sex.as_deref(),
            Field::Disease => self.disease.as_deref(),
            Field::Date => self.date.as_deref(),
        }
    }

    /// Set the value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        let value = Some(value.into());
        match field {
            Field::Name => self.name = value,
            Field::Age => self.age = value,
            Field::Sex => self.sex = value,
            Field::Disease => self.disease = value,
            Field::Date => self.date = value,
        }
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    pub fn with_disease(mut self, disease: impl Into<String>) -> Self {
        self.disease = Some(disease.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Declarative placement of fields on a form template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Field anchors; fields without an entry are never drawn
    #[serde(default = "default_coordinates")]
    pub coordinates: BTreeMap<Field, Position>,
    /// Text height in pixels
    #[serde(default = "default_font_size", rename = "fontSize")]
    pub font_size: u32,
    /// Draw calibration crosshairs at every anchor
    #[serde(default)]
    pub markers: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            coordinates: default_coordinates(),
            font_size: default_font_size(),
            markers: false,
        }
    }
}

impl Layout {
    /// Create a layout with the stock prescription coordinates
    pub fn new() -> Self {
        Layout::default()
    }

    /// Set or replace the anchor of a field
    pub fn set_coordinate(&mut self, field: Field, position: Position) -> &mut Self {
        self.coordinates.insert(field, position);
        self
    }

    /// Set the text height in pixels
    pub fn set_font_size(&mut self, size: u32) -> &mut Self {
        self.font_size = size;
        self
    }

    /// Enable or disable calibration crosshairs
    pub fn set_markers(&mut self, markers: bool) -> &mut Self {
        self.markers = markers;
        self
    }
}

fn default_font_size() -> u32 {
    32
}

/// Anchors matching the stock prescription form shipped with the project
fn default_coordinates() -> BTreeMap<Field, Position> {
    let mut coordinates = BTreeMap::new();
    coordinates.insert(Field::Name, Position::new(140, 228));
    coordinates.insert(Field::Age, Position::new(620, 220));
    coordinates.insert(Field::Sex, Position::new(400, 220));
    coordinates.insert(Field::Disease, Position::new(390, 320));
    coordinates.insert(Field::Date, Position::new(530, 190));
    coordinates
}
