//! Normalizes Scryfall cards with different layouts into a consistent shape.
//!
//! Handles: normal, split, flip, transform, modal_dfc, adventure, meld and
//! friends. Normalization is total: a field that cannot be coerced (power
//! `*`, price `null`, an unparseable date) ends up absent, never an error.

use chrono::NaiveDate;

use sg_core::common::types::{CardFace, CardLayout, ScryfallCard};
use sg_core::domain::{BackFace, NormalizedCard};

use crate::common::constants::FACE_SEPARATOR;
use crate::observability::metrics;

const KNOWN_SUPERTYPES: [&str; 5] = ["Legendary", "Basic", "Snow", "World", "Ongoing"];
const KNOWN_TYPES: [&str; 10] = [
    "Creature",
    "Artifact",
    "Enchantment",
    "Land",
    "Planeswalker",
    "Instant",
    "Sorcery",
    "Battle",
    "Kindred",
    "Tribal",
];

/// Normalize one raw card into the canonical record.
///
/// Pure and total: the same input always yields the identical output, and
/// no input panics or errors.
pub fn normalize_card(card: &ScryfallCard) -> NormalizedCard {
    let (types, supertypes, subtypes) = parse_type_line(card);
    let extracted = extract_layout_data(card);

    NormalizedCard {
        id: card.id.clone(),
        name: card.name.clone(),
        layout: card.layout,
        cmc: extracted.cmc.unwrap_or(card.cmc),
        colors: extracted
            .colors
            .or_else(|| card.colors.clone())
            .unwrap_or_default(),
        color_identity: card.color_identity.clone(),
        types,
        supertypes,
        subtypes,
        rarity: card.rarity.clone(),
        set: card.set.clone(),
        set_name: card.set_name.clone(),
        collector_number: card.collector_number.clone(),
        oracle_text: extracted.oracle_text,
        power: extracted.power,
        toughness: extracted.toughness,
        defense: extracted.defense,
        price_usd: parse_price(card.prices.usd.as_deref()),
        price_eur: parse_price(card.prices.eur.as_deref()),
        released_at: parse_release_date(&card.released_at),
        image_url: extracted.image_url,
        back_face: extracted.back_face,
    }
}

/// Normalize a batch, preserving input order. No deduplication.
pub fn normalize_cards(cards: &[ScryfallCard]) -> Vec<NormalizedCard> {
    metrics::normalize::batch_size(cards.len());
    let normalized: Vec<NormalizedCard> = cards.iter().map(normalize_card).collect();
    metrics::normalize::records_processed(normalized.len());
    normalized
}

/// Fields whose source depends on the card layout.
#[derive(Default)]
struct LayoutData {
    colors: Option<Vec<String>>,
    cmc: Option<f64>,
    power: Option<f64>,
    toughness: Option<f64>,
    defense: Option<f64>,
    image_url: Option<String>,
    oracle_text: Option<String>,
    back_face: Option<BackFace>,
}

/// Which fields come from which face, per layout.
fn extract_layout_data(card: &ScryfallCard) -> LayoutData {
    let mut result = LayoutData::default();

    match card.layout {
        // Standard single-faced cards, plus anything we do not recognize
        CardLayout::Normal
        | CardLayout::Leveler
        | CardLayout::Saga
        | CardLayout::Class
        | CardLayout::Mutate
        | CardLayout::Prototype
        | CardLayout::Other => {
            result.colors = card.colors.clone();
            result.power = parse_numeric(card.power.as_deref());
            result.toughness = parse_numeric(card.toughness.as_deref());
            result.defense = parse_numeric(card.defense.as_deref());
            result.image_url = record_image(card);
            result.oracle_text = card.oracle_text.clone();
        }

        // Split cards (e.g. Fire // Ice) combine data from both halves
        CardLayout::Split => {
            if let Some(faces) = &card.card_faces {
                let mut colors: Vec<String> = Vec::new();
                let mut oracle_texts: Vec<&str> = Vec::new();
                for face in faces {
                    if let Some(face_colors) = &face.colors {
                        for color in face_colors {
                            if !colors.contains(color) {
                                colors.push(color.clone());
                            }
                        }
                    }
                    if let Some(text) = &face.oracle_text {
                        oracle_texts.push(text);
                    }
                }
                result.colors = Some(colors);
                result.oracle_text = Some(oracle_texts.join(FACE_SEPARATOR));
                result.image_url = faces
                    .first()
                    .and_then(face_image)
                    .or_else(|| record_image(card));
            }
        }

        // Flip cards read the front face; the art is shared, so the image
        // stays record-level
        CardLayout::Flip => {
            if let Some(face) = card.front_face() {
                result.colors = face.colors.clone();
                result.power = parse_numeric(face.power.as_deref());
                result.toughness = parse_numeric(face.toughness.as_deref());
                result.oracle_text = face.oracle_text.clone();
                result.image_url = record_image(card);
            }
        }

        // Double-faced cards: front face for the stats, back face kept in
        // full for drill-down display
        CardLayout::Transform | CardLayout::ModalDfc | CardLayout::Battle => {
            if let Some(face) = card.front_face() {
                result.colors = face.colors.clone().or_else(|| card.colors.clone());
                result.power = parse_numeric(face.power.as_deref());
                result.toughness = parse_numeric(face.toughness.as_deref());
                result.defense = parse_numeric(face.defense.as_deref());
                result.oracle_text = face.oracle_text.clone();
                result.image_url = face_image(face).or_else(|| record_image(card));

                if let Some(back) = card.back_face() {
                    result.back_face = Some(extract_back_face(back));
                    metrics::normalize::back_face_extracted();
                }
            }
        }

        // Adventure cards: the main creature is the first face
        CardLayout::Adventure => {
            if let Some(face) = card.front_face() {
                result.colors = face.colors.clone();
                result.power = parse_numeric(face.power.as_deref());
                result.toughness = parse_numeric(face.toughness.as_deref());
                result.oracle_text = face.oracle_text.clone();
                result.image_url = record_image(card);
            }
        }

        CardLayout::Meld => {
            if let Some(face) = card.front_face() {
                result.colors = face.colors.clone();
                result.power = parse_numeric(face.power.as_deref());
                result.toughness = parse_numeric(face.toughness.as_deref());
                result.oracle_text = face.oracle_text.clone();
                result.image_url = face_image(face);
            }
        }
    }

    result
}

fn extract_back_face(face: &CardFace) -> BackFace {
    BackFace {
        name: face.name.clone(),
        image_url: face_image(face),
        oracle_text: face.oracle_text.clone(),
        type_line: face.type_line.clone(),
        mana_cost: face.mana_cost.clone(),
        colors: face.colors.clone(),
        power: parse_numeric(face.power.as_deref()),
        toughness: parse_numeric(face.toughness.as_deref()),
        defense: parse_numeric(face.defense.as_deref()),
    }
}

fn face_image(face: &CardFace) -> Option<String> {
    face.image_uris.as_ref().and_then(|uris| uris.normal.clone())
}

fn record_image(card: &ScryfallCard) -> Option<String> {
    card.image_uris.as_ref().and_then(|uris| uris.normal.clone())
}

/// Parse the type line into types, supertypes, and subtypes.
///
/// Example: "Legendary Creature — Kitsune Cleric" ->
///   supertypes ["Legendary"], types ["Creature"], subtypes ["Kitsune", "Cleric"]
///
/// For multi-faced cards the front face's type line wins. Pre-dash words
/// matching neither closed vocabulary are dropped from both lists.
fn parse_type_line(card: &ScryfallCard) -> (Vec<String>, Vec<String>, Vec<String>) {
    let type_line = card
        .front_face()
        .map(|face| face.type_line.as_str())
        .unwrap_or(&card.type_line);

    let mut halves = type_line.splitn(2, '\u{2014}');
    let types_part = halves.next().unwrap_or("").trim();
    let subtypes_part = halves.next().map(str::trim);

    let type_words: Vec<&str> = types_part.split_whitespace().collect();

    let supertypes = type_words
        .iter()
        .filter(|word| KNOWN_SUPERTYPES.contains(*word))
        .map(|word| word.to_string())
        .collect();
    let types = type_words
        .iter()
        .filter(|word| KNOWN_TYPES.contains(*word))
        .map(|word| word.to_string())
        .collect();
    let subtypes = subtypes_part
        .map(|part| part.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    (types, supertypes, subtypes)
}

/// Parse power/toughness/defense values (can be numbers, `*`, `X`, etc.).
/// Anything that is not a plain float degrades to absent.
fn parse_numeric(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Prices arrive as decimal-string-or-null; same degradation rules.
fn parse_price(price: Option<&str>) -> Option<f64> {
    parse_numeric(price)
}

fn parse_release_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
