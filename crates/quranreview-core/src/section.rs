//! Static section reference table and unit-range validation.

use serde::Serialize;

use crate::error::ValidationError;

/// Where a section was revealed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RevelationKind {
    Meccan,
    Medinan,
}

/// A section of the text (a surah) with its unit (ayah) count.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: u32,
    pub name: &'static str,
    pub english_name: &'static str,
    pub length: u32,
    pub kind: RevelationKind,
}

const fn section(
    id: u32,
    name: &'static str,
    english_name: &'static str,
    length: u32,
    kind: RevelationKind,
) -> Section {
    Section {
        id,
        name,
        english_name,
        length,
        kind,
    }
}

/// Sections available for new items.
pub static SECTIONS: [Section; 10] = [
    section(1, "الفاتحة", "Al-Fatihah", 7, RevelationKind::Meccan),
    section(2, "البقرة", "Al-Baqarah", 286, RevelationKind::Medinan),
    section(3, "آل عمران", "Aal-E-Imran", 200, RevelationKind::Medinan),
    section(4, "النساء", "An-Nisa", 176, RevelationKind::Medinan),
    section(5, "المائدة", "Al-Ma'idah", 120, RevelationKind::Medinan),
    section(6, "الأنعام", "Al-An'am", 165, RevelationKind::Meccan),
    section(7, "الأعراف", "Al-A'raf", 206, RevelationKind::Meccan),
    section(8, "الأنفال", "Al-Anfal", 75, RevelationKind::Medinan),
    section(9, "التوبة", "At-Tawbah", 129, RevelationKind::Medinan),
    section(10, "يونس", "Yunus", 109, RevelationKind::Meccan),
];

/// Look up a section by id.
///
/// # Errors
/// Returns [`ValidationError::UnknownSection`] if `id` is not in [`SECTIONS`].
pub fn find_section(id: u32) -> Result<&'static Section, ValidationError> {
    SECTIONS
        .iter()
        .find(|s| s.id == id)
        .ok_or(ValidationError::UnknownSection(id))
}

/// Check that `from_unit..=to_unit` is a well-formed range inside `section`.
///
/// # Errors
/// Returns [`ValidationError::InvalidRange`] when `from_unit < 1`,
/// `to_unit < from_unit`, or `to_unit > section.length`.
pub fn validate_new_range(
    section: &Section,
    from_unit: u32,
    to_unit: u32,
) -> Result<(), ValidationError> {
    if from_unit < 1 || to_unit < from_unit || to_unit > section.length {
        return Err(ValidationError::InvalidRange {
            from_unit,
            to_unit,
            length: section.length,
        });
    }
    Ok(())
}
