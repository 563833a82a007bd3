//! Behavior-driven tests for feed parsing.
//!
//! These tests verify HOW the parser treats the real-world messiness of the
//! published price sheet: drifting header labels, currency-decorated prices,
//! quoted commas, and individually broken rows.

use quotedesk_core::{parse_feed, ColumnRole, FeedError};

// =============================================================================
// Feed Parsing: Well-Formed Input
// =============================================================================

#[test]
fn when_feed_is_well_formed_every_row_parses_in_order() {
    // Given: A clean export with the canonical header
    let csv = "Name,Symbol,CMP\n\
               Tata Consultancy Services Ltd,TCS,3500.25\n\
               Infosys Ltd,INFY,1450.10\n\
               Wipro Ltd,WIPRO,542.35\n";

    // When: The document is parsed
    let records = parse_feed(csv).expect("well-formed feed should parse");

    // Then: Every row survives, in feed order
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].symbol.as_str(), "TCS");
    assert_eq!(records[0].price, 3500.25);
    assert_eq!(records[1].symbol.as_str(), "INFY");
    assert_eq!(records[2].symbol.as_str(), "WIPRO");
}

#[test]
fn when_header_labels_drift_columns_are_still_located() {
    let exports = [
        "Company,Ticker,LTP\nInfosys Ltd,INFY,1450.10\n",
        "Stock Name,NSE Code,Value\nInfosys Ltd,INFY,1450.10\n",
        "company name,symbol,current price\nInfosys Ltd,INFY,1450.10\n",
    ];

    for csv in exports {
        let records = parse_feed(csv).expect("synonym header should parse");
        assert_eq!(records.len(), 1, "failed for header: {csv}");
        assert_eq!(records[0].symbol.as_str(), "INFY");
        assert_eq!(records[0].price, 1450.10);
    }
}

#[test]
fn when_price_is_currency_decorated_the_number_survives() {
    let csv = "Name,Symbol,CMP\nTata Motors Ltd,TATAMOTORS,\"\u{20b9}1,021.75\"\n";

    let records = parse_feed(csv).expect("decorated price should parse");

    assert_eq!(records[0].price, 1021.75);
}

#[test]
fn when_name_contains_a_quoted_comma_it_stays_one_field() {
    let csv = "Name,Symbol,CMP\n\"Larsen, Toubro Ltd\",LT,3610.40\n";

    let records = parse_feed(csv).expect("quoted comma should parse");

    assert_eq!(records[0].name, "Larsen, Toubro Ltd");
    assert_eq!(records[0].symbol.as_str(), "LT");
}

#[test]
fn when_symbols_arrive_lowercase_they_normalize_to_uppercase() {
    let csv = "Name,Symbol,CMP\nInfosys Ltd, infy ,1450.10\n";

    let records = parse_feed(csv).expect("lowercase symbol should parse");

    assert_eq!(records[0].symbol.as_str(), "INFY");
}

#[test]
fn when_feed_repeats_a_symbol_both_rows_survive() {
    // The upstream sheet does not guarantee uniqueness; parsing must not
    // silently deduplicate.
    let csv = "Name,Symbol,CMP\n\
               Tata Consultancy Services Ltd,TCS,3500.25\n\
               Stale duplicate row,TCS,3400.00\n";

    let records = parse_feed(csv).expect("duplicates should parse");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].symbol, records[1].symbol);
}

#[test]
fn labels_always_derive_from_symbol_and_name() {
    let csv = "Name,Symbol,CMP\n\
               Tata Consultancy Services Ltd,TCS,3500.25\n\
               \"Larsen, Toubro Ltd\",LT,3610.40\n";

    let records = parse_feed(csv).expect("feed should parse");

    for record in &records {
        assert_eq!(
            record.label(),
            format!("{} - {}", record.symbol.as_str(), record.name)
        );
    }
}

// =============================================================================
// Feed Parsing: Row-Level Resilience
// =============================================================================

#[test]
fn when_one_row_has_a_bad_price_only_that_row_is_skipped() {
    // Given: Five rows where the third price is not numeric
    let csv = "Name,Symbol,CMP\n\
               Reliance Industries Ltd,RELIANCE,2945.60\n\
               Infosys Ltd,INFY,1450.10\n\
               HDFC Bank Ltd,HDFCBANK,N/A\n\
               ITC Ltd,ITC,465.80\n\
               Wipro Ltd,WIPRO,542.35\n";

    // When: The document is parsed
    let records = parse_feed(csv).expect("parse should not abort");

    // Then: Exactly four records survive and order is preserved
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.symbol.as_str() != "HDFCBANK"));
    assert_eq!(records[2].symbol.as_str(), "ITC");
}

#[test]
fn when_rows_are_short_or_blank_they_are_skipped() {
    let csv = "Name,Symbol,CMP\n\
               Reliance Industries Ltd,RELIANCE,2945.60\n\
               \n\
               only-one-field\n\
               ITC Ltd,ITC,465.80\n";

    let records = parse_feed(csv).expect("parse should not abort");

    assert_eq!(records.len(), 2);
}

#[test]
fn when_price_is_zero_or_negative_the_row_is_rejected() {
    let csv = "Name,Symbol,CMP\n\
               Free Stock Ltd,FREE,0\n\
               Negative Stock Ltd,NEG,-12.50\n\
               ITC Ltd,ITC,465.80\n";

    let records = parse_feed(csv).expect("parse should not abort");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].symbol.as_str(), "ITC");
}

#[test]
fn when_symbol_or_name_is_blank_the_row_is_rejected() {
    let csv = "Name,Symbol,CMP\n\
               ,GHOST,100.0\n\
               Nameless Ltd,,100.0\n\
               ITC Ltd,ITC,465.80\n";

    let records = parse_feed(csv).expect("parse should not abort");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].symbol.as_str(), "ITC");
}

// =============================================================================
// Feed Parsing: Structural Failures
// =============================================================================

#[test]
fn when_the_price_column_is_missing_the_whole_parse_fails() {
    let csv = "Name,Symbol,Sector\nInfosys Ltd,INFY,IT\n";

    let error = parse_feed(csv).expect_err("missing price column is structural");

    assert_eq!(error, FeedError::MissingColumn(ColumnRole::Price));
}

#[test]
fn when_the_feed_is_only_a_header_the_parse_fails() {
    let error = parse_feed("Name,Symbol,CMP\n").expect_err("no data rows");

    assert_eq!(error, FeedError::Truncated);
}

#[test]
fn when_the_feed_is_empty_the_parse_fails() {
    let error = parse_feed("").expect_err("empty document");

    assert_eq!(error, FeedError::Truncated);
}

#[test]
fn when_every_row_is_invalid_the_parse_fails() {
    // A dataset with zero entries is worse than stale fallback data.
    let csv = "Name,Symbol,CMP\n,GHOST,100.0\nNameless Ltd,,\n";

    let error = parse_feed(csv).expect_err("zero survivors is structural");

    assert_eq!(error, FeedError::NoValidRows);
}
