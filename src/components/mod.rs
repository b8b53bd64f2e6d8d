/// Site header and footer.
pub mod header;
/// Home page mode switcher.
pub mod sidebar;
/// The interactive Venn diagram.
pub mod venn;
