//! Text rendering for the terminal

use duproprio_core::{format_money, Property};

/// Title between two rows of `#`, 20 columns wider than the title
pub fn banner(title: &str) -> String {
    let width = title.chars().count() + 20;
    let rule = "#".repeat(width);
    format!("{rule}\n{title:^width$}\n{rule}\n")
}

/// Boxed table with centered cells.
///
/// Widths are counted in characters so accented names line up.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let separator = format!(
        "+-{}-+",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    );

    let line = |cells: Vec<&str>| -> String {
        let inner = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| center(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("| {inner} |")
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in rows {
        let cells: Vec<&str> = (0..headers.len())
            .map(|idx| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect();
        out.push_str(&line(cells));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

/// Pad `text` to `width` characters, centered.
///
/// When the padding is odd the extra space goes on the left if `width` is
/// odd, on the right otherwise.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(margin - left))
}

pub const PROPERTY_HEADERS: [&str; 5] = ["City", "Type", "Bedrooms", "Bathrooms", "Price"];

/// Table of properties in the order given
pub fn property_table(properties: &[Property]) -> String {
    let rows: Vec<Vec<String>> = properties
        .iter()
        .map(|p| {
            vec![
                p.city.to_string(),
                p.property_type.to_string(),
                p.bedrooms.to_string(),
                p.bathrooms.to_string(),
                format_money(p.price),
            ]
        })
        .collect();
    table(&PROPERTY_HEADERS, &rows)
}
