pub mod source;
pub mod product {
    pub mod entry;
    pub mod lookup;
}
