use chrono::NaiveDate;

/// Hire dates arrive either as `DD/MM/YYYY` (the entry-mask format) or as
/// ISO `YYYY-MM-DD`. Presence of `/` selects the former; day and month may
/// be un-padded. Malformed values are expected data noise, kept as an
/// explicit `Unparseable` arm the caller must handle (and count), never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HireDateModel {
    Parsed(NaiveDate),
    Unparseable,
}

impl HireDateModel {
    pub(crate) fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return HireDateModel::Unparseable;
        }
        let format = if raw.contains('/') { "%d/%m/%Y" } else { "%Y-%m-%d" };
        match NaiveDate::parse_from_str(raw, format) {
            Ok(date) => HireDateModel::Parsed(date),
            Err(_) => HireDateModel::Unparseable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_formats_yield_the_same_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(HireDateModel::parse("15/01/2024"), HireDateModel::Parsed(expected));
        assert_eq!(HireDateModel::parse("2024-01-15"), HireDateModel::Parsed(expected));
    }

    #[test]
    fn accepts_unpadded_day_and_month() {
        assert_eq!(
            HireDateModel::parse("1/2/2024"),
            HireDateModel::Parsed(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
    }

    #[test]
    fn malformed_input_is_unparseable_not_an_error() {
        assert_eq!(HireDateModel::parse(""), HireDateModel::Unparseable);
        assert_eq!(HireDateModel::parse("   "), HireDateModel::Unparseable);
        assert_eq!(HireDateModel::parse("not a date"), HireDateModel::Unparseable);
        assert_eq!(HireDateModel::parse("31/02/2024"), HireDateModel::Unparseable);
        assert_eq!(HireDateModel::parse("2024/01/15"), HireDateModel::Unparseable);
    }
}
