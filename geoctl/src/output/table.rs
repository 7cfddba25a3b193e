use tabled::{Table, settings::Style};

/// Applies the house style to printed tables
pub(crate) trait GeoctlTable {
    fn styled(&mut self) -> &mut Self;
}

impl GeoctlTable for Table {
    fn styled(&mut self) -> &mut Self {
        self.with(Style::psql())
    }
}
