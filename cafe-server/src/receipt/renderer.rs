//! Receipt renderer
//!
//! Plain text for the receipt file, ESC/POS for thermal printers.

use cafe_printer::{EscPosBuilder, pad_text, text_width, truncate_text};

use super::Receipt;

/// Currency sign in the text document
const CURRENCY_TEXT: &str = "₺";

/// Windows-1254 has no lira sign
const CURRENCY_PRINT: &str = "TL";

fn title(receipt: &Receipt) -> String {
    format!("Masa {} Adisyon", receipt.table_no)
}

fn centered(s: &str, width: usize) -> String {
    let w = text_width(s);
    if w >= width {
        return s.to_string();
    }
    pad_text(s, w + (width - w) / 2, true)
}

/// Render the receipt as a plain text document
///
/// ```text
///        Masa 3 Adisyon
/// ================================
/// Espresso x2 = 120.00 ₺
///   Not: sade
/// --------------------------------
/// Toplam: 120.00 ₺
/// ```
pub fn render_text(receipt: &Receipt, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&centered(&title(receipt), width));
    out.push('\n');
    out.push_str(&"=".repeat(width));
    out.push('\n');

    for entry in &receipt.entries {
        out.push_str(&format!(
            "{} x{} = {:.2} {}\n",
            entry.name, entry.quantity, entry.line_total, CURRENCY_TEXT
        ));
        if let Some(note) = &entry.note {
            out.push_str(&format!("  Not: {}\n", note));
        }
    }

    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!("Toplam: {:.2} {}\n", receipt.total, CURRENCY_TEXT));
    out
}

/// `name xN` clipped so that it and `amount` share one printed line
fn item_label(name: &str, quantity: i32, amount: &str, width: usize) -> String {
    let suffix = format!(" x{quantity}");
    let room = width.saturating_sub(text_width(&suffix) + text_width(amount) + 1);
    format!("{}{}", truncate_text(name, room), suffix)
}

/// Render the receipt to ESC/POS bytes in the printer code page
pub fn render_escpos(receipt: &Receipt, width: usize) -> Vec<u8> {
    let mut b = EscPosBuilder::new(width);

    // Header
    b.center().double_size().bold();
    b.line(&format!("Masa {}", receipt.table_no));
    b.reset_size().bold_off();
    b.line("Adisyon");
    b.left().sep_double();

    // Items
    for entry in &receipt.entries {
        let amount = format!("{:.2} {}", entry.line_total, CURRENCY_PRINT);
        b.line_lr(&item_label(&entry.name, entry.quantity, &amount, width), &amount);
        if let Some(note) = &entry.note {
            b.line(&format!("  Not: {}", note));
        }
    }

    // Footer
    b.sep_single();
    b.bold();
    b.line_lr("Toplam", &format!("{:.2} {}", receipt.total, CURRENCY_PRINT));
    b.bold_off();
    b.feed(3).cut();

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::ReceiptEntry;

    fn receipt() -> Receipt {
        Receipt {
            table_no: 3,
            entries: vec![
                ReceiptEntry {
                    name: "Espresso".into(),
                    quantity: 2,
                    line_total: 120.0,
                    note: Some("sade".into()),
                },
                ReceiptEntry {
                    name: "Şekerpare".into(),
                    quantity: 1,
                    line_total: 85.5,
                    note: None,
                },
            ],
            total: 205.5,
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&receipt(), 32);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].trim(), "Masa 3 Adisyon");
        assert_eq!(lines[1], "=".repeat(32));
        assert_eq!(lines[2], "Espresso x2 = 120.00 ₺");
        assert_eq!(lines[3], "  Not: sade");
        assert_eq!(lines[4], "Şekerpare x1 = 85.50 ₺");
        assert_eq!(lines[5], "-".repeat(32));
        assert_eq!(lines[6], "Toplam: 205.50 ₺");
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered("ab", 6), "  ab");
        assert_eq!(centered("toolong", 3), "toolong");
    }

    #[test]
    fn test_item_label_clips_long_names() {
        assert_eq!(item_label("Espresso", 2, "120.00 TL", 32), "Espresso x2");
        // 20 - len(" x1") - len("85.50 TL") - 1 = 8
        assert_eq!(item_label("Şekerpare Tatlısı", 1, "85.50 TL", 20), "Şekerpar x1");
    }

    #[test]
    fn test_render_escpos() {
        let data = render_escpos(&receipt(), 32);
        // code page select, INIT, code page select
        assert_eq!(&data[..8], &[0x1B, 0x74, 48, 0x1B, 0x40, 0x1B, 0x74, 48]);
        // full cut at the end
        assert_eq!(&data[data.len() - 3..], &[0x1D, 0x56, 0x00]);

        let text = String::from_utf8_lossy(&data);
        assert!(text.contains("Masa 3"));
        assert!(text.contains("120.00 TL"));
        assert!(text.contains("Toplam"));
        // 'Ş' encoded as a single Windows-1254 byte
        assert!(data.contains(&0xDE));
    }
}
