//! Plain-text receipt rendering
//!
//! Renders a committed sale as fixed-width text for the print hand-off.
//! Printing transport is the host's concern.

use chrono::{DateTime, Utc};
use shared::models::Sale;

const WIDTH: usize = 32;

/// Fixed-width receipt builder
struct ReceiptBuilder {
    width: usize,
    out: String,
}

impl ReceiptBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            out: String::new(),
        }
    }

    fn line(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    fn center(&mut self, text: &str) -> &mut Self {
        let w = text.chars().count();
        if w >= self.width {
            return self.line(text);
        }
        let pad = (self.width - w) / 2;
        let padded = format!("{}{}", " ".repeat(pad), text);
        self.line(&padded)
    }

    /// Left and right text on the same line
    fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = left.chars().count();
        let rw = right.chars().count();
        if lw + rw >= self.width {
            let joined = format!("{left} {right}");
            self.line(&joined)
        } else {
            let padded = format!("{}{}{}", left, " ".repeat(self.width - lw - rw), right);
            self.line(&padded)
        }
    }

    fn sep(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Format a whole-unit amount with thousands separators ("Rp15.000")
fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}

/// Render a sale as receipt text
pub fn render(sale: &Sale) -> String {
    let mut b = ReceiptBuilder::new(WIDTH);

    b.center("WARUNG BAKSOKU");
    b.center("Jl. Pasar Baru No. 1");
    b.sep();

    let when = DateTime::<Utc>::from_timestamp_millis(sale.timestamp).unwrap_or_else(Utc::now);
    b.line_lr("Waktu", &when.format("%d/%m/%Y %H:%M").to_string());
    b.line_lr("Kasir", &sale.staff_name);
    if let Some(id) = &sale.id {
        let short: String = id.chars().take(8).collect();
        b.line_lr("No", &short);
    }
    b.sep();

    for item in &sale.items {
        b.line(&item.name);
        b.line_lr(
            &format!("  {} x {}", item.quantity, format_rupiah(item.price)),
            &format_rupiah(item.line_total()),
        );
    }
    b.sep();

    b.line_lr("Subtotal", &format_rupiah(sale.subtotal));
    if sale.discount > 0 {
        let label = match &sale.promo_code {
            Some(code) => format!("Diskon ({code})"),
            None => "Diskon".to_string(),
        };
        b.line_lr(&label, &format!("-{}", format_rupiah(sale.discount)));
    }
    b.line_lr("Total", &format_rupiah(sale.total));
    b.line_lr("Bayar", sale.payment_method.name());
    b.sep();

    b.center("Terima Kasih");

    b.finish()
}
