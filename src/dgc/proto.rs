//! Wire format of the binary value-set export
//!
//! The gateway ships `export.bin` as a protocol buffer message holding one
//! value set per coding category.

/// A single coded value and its display text
#[derive(Clone, PartialEq, prost::Message)]
pub struct ValueSetItem {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub display_text: String,
}

/// One coding category's entries
#[derive(Clone, PartialEq, prost::Message)]
pub struct ValueSet {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<ValueSetItem>,
}

/// Top-level export: one value set per category
#[derive(Clone, PartialEq, prost::Message)]
pub struct ValueSets {
    /// Targeted disease or agent
    #[prost(message, optional, tag = "1")]
    pub tg: Option<ValueSet>,
    /// Vaccine or prophylaxis
    #[prost(message, optional, tag = "2")]
    pub vp: Option<ValueSet>,
    /// Marketing authorization holder
    #[prost(message, optional, tag = "3")]
    pub ma: Option<ValueSet>,
    /// Medicinal product
    #[prost(message, optional, tag = "4")]
    pub mp: Option<ValueSet>,
    /// Test type
    #[prost(message, optional, tag = "5")]
    pub tc_tt: Option<ValueSet>,
    /// Test device manufacturer
    #[prost(message, optional, tag = "6")]
    pub tc_ma: Option<ValueSet>,
    /// Test result
    #[prost(message, optional, tag = "7")]
    pub tc_tr: Option<ValueSet>,
}

impl ValueSets {
    /// Category name / item list pairs, in export order
    pub fn categories(&self) -> [(&'static str, &[ValueSetItem]); 7] {
        fn items(set: &Option<ValueSet>) -> &[ValueSetItem] {
            set.as_ref().map(|s| s.items.as_slice()).unwrap_or(&[])
        }
        [
            ("tg", items(&self.tg)),
            ("vp", items(&self.vp)),
            ("ma", items(&self.ma)),
            ("mp", items(&self.mp)),
            ("tcTt", items(&self.tc_tt)),
            ("tcMa", items(&self.tc_ma)),
            ("tcTr", items(&self.tc_tr)),
        ]
    }
}
