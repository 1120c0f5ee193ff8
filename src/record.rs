// src/record.rs
//
// Canonical row model for the feed.
//
// - Column: the fixed column set the published sheet exposes. Each variant
//   knows its feed header (parse + CSV export) and its display label
//   (detail view + PDF).
// - Record: one parsed row, materialized as a fixed-width field vector
//   aligned to Column::ALL. Cells the feed lacks are empty strings.
//   Immutable after parse; trimming happens once at load time.
// - RecordSet: the ordered in-memory record list. Replaced wholesale on
//   every successful refresh, never mutated incrementally.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Contract,
    Identification,
    Client,
    PurchaseType,
    Buyer,
    Payment,
    Status,
    Month,
    Description,
    Currency,
    UnitValue,
    TotalValue,
    ProcedureType,
    AnnualOrOneOff,
    ValidFrom,
    ValidTo,
    LineOfBusiness,
    Company,
    PolicyNumber,
    Certificate,
    MovementType,
    PolicyValue,
}

use Column::*;

impl Column {
    pub const ALL: [Column; 22] = [
        Contract, Identification, Client, PurchaseType, Buyer, Payment, Status,
        Month, Description, Currency, UnitValue, TotalValue, ProcedureType,
        AnnualOrOneOff, ValidFrom, ValidTo, LineOfBusiness, Company,
        PolicyNumber, Certificate, MovementType, PolicyValue,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Exact header string the feed uses for this column.
    pub fn header(self) -> &'static str {
        match self {
            Contract => "No. De OM / Contrato",
            Identification => "Identificación",
            Client => "Cliente",
            PurchaseType => "Tipo Compra",
            Buyer => "Comprador responsable",
            Payment => "Pago",
            Status => "Estado",
            Month => "Mes",
            Description => "Descripcion",
            Currency => "Moneda",
            UnitValue => "Valor Unitario",
            TotalValue => "Valor Total",
            ProcedureType => "Tipo de tramite",
            AnnualOrOneOff => "Anual o Puntual",
            ValidFrom => "Vigencia inicio",
            ValidTo => "Vigencia fin",
            LineOfBusiness => "Ramo",
            Company => "Compañía",
            PolicyNumber => "Número de póliza",
            Certificate => "Certificado",
            MovementType => "Tipo Movimiento",
            PolicyValue => "Valor póliza",
        }
    }

    /// Human label for detail/PDF rendering. Mostly the header, with the
    /// accents the sheet headers happen to omit.
    pub fn label(self) -> &'static str {
        match self {
            Description => "Descripción",
            ProcedureType => "Tipo de trámite",
            other => other.header(),
        }
    }
}

/// Detail-block field order (fixed; only non-empty fields are shown).
pub const DETAIL_FIELDS: [Column; 17] = [
    Month, Description, Currency, UnitValue, TotalValue, ProcedureType,
    AnnualOrOneOff, ValidFrom, ValidTo, LineOfBusiness, Company, PolicyNumber,
    Certificate, MovementType, PolicyValue, Payment, Status,
];

/// Table columns shown per group (payment mark is synthesized separately).
pub const TABLE_FIELDS: [Column; 5] =
    [Contract, Identification, Client, PurchaseType, Buyer];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>, // len == Column::COUNT, aligned to Column::ALL
}

impl Record {
    pub fn get(&self, col: Column) -> &str {
        &self.fields[col as usize]
    }

    /// Build from explicit (header, value) pairs; unknown headers ignored,
    /// missing columns empty. Used by tests and the feed parser.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut fields = vec![s!(); Column::COUNT];
        for (h, v) in pairs {
            if let Some(ix) = Column::ALL.iter().position(|c| c.header() == h.trim()) {
                fields[ix] = v.trim().to_string();
            }
        }
        Self { fields }
    }

    /// Full field vector in Column::ALL order (export boundary).
    pub fn cells(&self) -> &[String] {
        &self.fields
    }

    /// (label, value) pairs for the given columns, non-empty values only.
    pub fn labeled_fields(&self, cols: &[Column]) -> Vec<(&'static str, &str)> {
        cols.iter()
            .map(|&c| (c.label(), self.get(c)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    pub records: Vec<Record>,
}

impl RecordSet {
    /// Map raw CSV rows through the header row into canonical records.
    /// Every cell is trimmed once here; rows keep feed order.
    pub fn from_rows(header: &[String], rows: Vec<Vec<String>>) -> Self {
        // source column index per canonical column
        let src: Vec<Option<usize>> = Column::ALL
            .iter()
            .map(|c| header.iter().position(|h| h.trim() == c.header()))
            .collect();

        let records = rows
            .into_iter()
            .map(|cells| {
                let fields = src
                    .iter()
                    .map(|s| {
                        s.and_then(|j| cells.get(j))
                            .map(|v| v.trim().to_string())
                            .unwrap_or_default()
                    })
                    .collect();
                Record { fields }
            })
            .collect();

        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
