//! Record editors.
//!
//! Forms keep every field as raw text while the operator types; values are
//! sanitised only when the form is submitted. A numeric field that does not
//! hold a finite number (or, for integer fields, a whole number) is submitted
//! as null, never as 0 or NaN.

use crate::api::PackScope;
use crate::types::{Pack, PackPayload, Pallet, PalletUpdate, RecordId};

/// Numeric field flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

/// Sanitise raw numeric text: empty, unparseable or non-finite input is `None`;
/// for [`NumberKind::Integer`] a fractional value is `None` as well.
pub fn sanitize_number(raw: Option<&str>, kind: NumberKind) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    match kind {
        NumberKind::Float => Some(value),
        NumberKind::Integer if value.fract() == 0.0 => Some(value),
        NumberKind::Integer => None,
    }
}

/// Integer sanitisation; values outside the exactly-representable range are `None`
pub fn sanitize_integer(raw: Option<&str>) -> Option<i64> {
    sanitize_number(raw, NumberKind::Integer)
        .filter(|v| v.abs() < 9_007_199_254_740_992.0)
        .map(|v| v as i64)
}

pub fn sanitize_float(raw: Option<&str>) -> Option<f64> {
    sanitize_number(raw, NumberKind::Float)
}

/// Trimmed text, or `None` when empty
pub fn sanitize_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Lenient truthiness for flag input typed as text
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "on" | "x"
    )
}

/// Render a number for an input field without a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// How a form field is edited and sanitised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Flag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Raw text; flags hold `"true"` or `"false"`
    pub value: String,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, value: String) -> Self {
        Self {
            name,
            label,
            kind,
            value,
        }
    }

    fn flag(name: &'static str, label: &'static str, on: bool) -> Self {
        Self::new(name, label, FieldKind::Flag, on.to_string())
    }

    pub fn is_on(&self) -> bool {
        self.kind == FieldKind::Flag && parse_flag(&self.value)
    }
}

/// An editable form: ordered fields plus the focused index
#[derive(Debug, Clone, PartialEq)]
pub struct RecordForm {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl RecordForm {
    fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focused: 0 }
    }

    /// Pallet edit form populated from a record
    pub fn for_pallet(pallet: &Pallet) -> Self {
        Self::new(vec![
            FormField::new(
                "qr_code",
                "QR Code",
                FieldKind::Text,
                pallet.qr_code.clone().unwrap_or_default(),
            ),
            FormField::flag("completed", "Completed", pallet.completed),
            FormField::new("num_doca", "Num Doca", FieldKind::Float, opt_float(pallet.num_doca)),
            FormField::new(
                "seq_pallet",
                "seq_pallet",
                FieldKind::Float,
                opt_float(pallet.seq_pallet),
            ),
            FormField::new("station", "station", FieldKind::Float, opt_float(pallet.station)),
        ])
    }

    /// Pack form: populated from `pack` when editing, or create defaults
    /// with `seq_pack` set to `now_ms`.
    pub fn for_pack(pack: Option<&Pack>, now_ms: i64) -> Self {
        let (qr_code, orig, seq_pack, lastpack, pospallet, robot_num) = match pack {
            Some(p) => (
                p.qr_code.clone().unwrap_or_default(),
                opt_int(p.orig),
                opt_float(p.seq_pack),
                p.lastpack,
                opt_int(p.pospallet),
                opt_int(p.robot_num),
            ),
            None => (
                String::new(),
                String::new(),
                now_ms.to_string(),
                false,
                String::new(),
                String::new(),
            ),
        };

        Self::new(vec![
            FormField::new("qr_code", "QR Code", FieldKind::Text, qr_code),
            FormField::new("orig", "orig", FieldKind::Integer, orig),
            FormField::new("seq_pack", "seq_pack", FieldKind::Float, seq_pack),
            FormField::flag("lastpack", "lastpack", lastpack),
            FormField::new("pospallet", "pospallet", FieldKind::Integer, pospallet),
            FormField::new("robot_num", "robot_num", FieldKind::Integer, robot_num),
        ])
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Raw value of a field
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type a character into the focused field. Flags toggle on space.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        match field.kind {
            FieldKind::Flag => {
                if c == ' ' {
                    field.value = (!parse_flag(&field.value)).to_string();
                }
            }
            _ => field.value.push(c),
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused)
            && field.kind != FieldKind::Flag
        {
            field.value.pop();
        }
    }

    /// Flip the focused flag field; no-op for other kinds
    pub fn toggle_focused(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused)
            && field.kind == FieldKind::Flag
        {
            field.value = (!parse_flag(&field.value)).to_string();
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.field(name).is_some_and(FormField::is_on)
    }

    /// Sanitised pallet update
    pub fn to_pallet_update(&self) -> PalletUpdate {
        PalletUpdate {
            qr_code: sanitize_text(self.raw("qr_code")),
            completed: self.flag("completed"),
            num_doca: sanitize_float(self.raw("num_doca")),
            seq_pallet: sanitize_float(self.raw("seq_pallet")),
            station: sanitize_float(self.raw("station")),
        }
    }

    /// Sanitised pack payload
    pub fn to_pack_payload(&self) -> PackPayload {
        PackPayload {
            qr_code: sanitize_text(self.raw("qr_code")),
            orig: sanitize_integer(self.raw("orig")),
            seq_pack: sanitize_float(self.raw("seq_pack")),
            lastpack: self.flag("lastpack"),
            pospallet: sanitize_integer(self.raw("pospallet")),
            robot_num: sanitize_integer(self.raw("robot_num")),
        }
    }
}

fn opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn opt_float(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// What submitting an editor does. The parent of a new pack is always
/// explicit; nothing is read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Pallet(RecordId),
    NewPack(PackScope),
    Pack(RecordId),
}

impl EditTarget {
    pub fn title(&self) -> String {
        match self {
            EditTarget::Pallet(id) => format!("Edit Pallet #{id}"),
            EditTarget::NewPack(PackScope::Pallet(id)) => format!("Add Pack to Pallet #{id}"),
            EditTarget::NewPack(PackScope::Orphans) => "Add Orphan Pack".to_string(),
            EditTarget::Pack(id) => format!("Edit Pack #{id}"),
        }
    }
}

/// An open editor: target, form, and submission state
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub target: EditTarget,
    pub form: RecordForm,
    pub saving: bool,
    pub error: Option<String>,
}

impl EditorState {
    pub fn edit_pallet(pallet: &Pallet) -> Self {
        Self::new(EditTarget::Pallet(pallet.id), RecordForm::for_pallet(pallet))
    }

    pub fn create_pack(scope: PackScope, now_ms: i64) -> Self {
        Self::new(EditTarget::NewPack(scope), RecordForm::for_pack(None, now_ms))
    }

    pub fn edit_pack(pack: &Pack) -> Self {
        Self::new(EditTarget::Pack(pack.id), RecordForm::for_pack(Some(pack), 0))
    }

    fn new(target: EditTarget, form: RecordForm) -> Self {
        Self {
            target,
            form,
            saving: false,
            error: None,
        }
    }
}
