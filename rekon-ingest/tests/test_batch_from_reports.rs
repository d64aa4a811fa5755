use rekon_ingest::{BatchConverter, parse_va_bca_text};

/// February export with two SUB-COMP sections and the usual report chrome.
const FEB_REPORT: &str = "\
PT BANK CENTRAL ASIA Tbk
LAPORAN REKENING KORAN VA
PERIODE : 01/02/24 s/d 29/02/24
REKENING : 8812000100            SUB-COMP 12

NO  NO.VA           NAMA                      MUTASI            TANGGAL   WAKTU     REF
---------------------------------------------------------------------------------------
1   88123456789     JOHN DOE        IDR 1,500.00   01/02/24  10:15:30  REF001  PYMT-9 TRF
2   88123456790     SITI AMINAH     IDR 250.50     02/02/24  11:00:00  REF002  VA-77 SETOR
                                  SUB-COMP 34
3   88123456791     BUDI SANTOSO    IDR 75,000.00  03/02/24  09:30:00  REF003
";

/// March export whose first rows precede any SUB-COMP header.
const MAR_REPORT: &str = "\
PT BANK CENTRAL ASIA Tbk
LAPORAN REKENING KORAN VA
PERIODE : 01/03/24 s/d 31/03/24

1   88200000001     AGUS WIJAYA     IDR 500.00     01/03/24  14:45:10  REF101  TRF-3
SUB-COMP 9
2   88200000002     RINA KUSUMA     IDR 1,000.00   02/03/24  16:20:05  REF102
";

#[test]
fn test_multi_file_batch_equals_per_file_concat() {
    let mut batch = BatchConverter::new();
    batch.ingest_text("feb.txt", FEB_REPORT).unwrap();
    batch.ingest_text("mar.txt", MAR_REPORT).unwrap();
    let merged = batch.finish();

    let mut expected = parse_va_bca_text(FEB_REPORT, "feb.txt").unwrap();
    expected.extend(parse_va_bca_text(MAR_REPORT, "mar.txt").unwrap());

    assert_eq!(merged.records(), &expected[..]);
    assert_eq!(merged.len(), 5);
    assert_eq!(merged.file_count(), 2);
}

#[test]
fn test_sub_company_sections_scope_their_rows() {
    let records = parse_va_bca_text(FEB_REPORT, "feb.txt").unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].sub_company.as_deref(), Some("12"));
    assert_eq!(records[1].sub_company.as_deref(), Some("12"));
    assert_eq!(records[2].sub_company.as_deref(), Some("34"));
}

#[test]
fn test_rows_before_any_header_have_no_sub_company() {
    let records = parse_va_bca_text(MAR_REPORT, "mar.txt").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sub_company, None);
    assert_eq!(records[1].sub_company.as_deref(), Some("9"));
}

#[test]
fn test_extracted_fields_from_report_rows() {
    let records = parse_va_bca_text(FEB_REPORT, "feb.txt").unwrap();

    let first = &records[0];
    assert_eq!(first.va_number, "88123456789");
    assert_eq!(first.credit, 1500.0);
    assert_eq!(first.date_cell(), "01/02/2024");
    assert_eq!(first.time_cell(), "10:15:30");
    assert_eq!(first.remark, "JOHN DOE PYMT TRF");
    assert_eq!(first.source_file, "feb.txt");

    let second = &records[1];
    assert_eq!(second.remark, "SITI AMINAH VA SETOR");
    assert_eq!(second.credit, 250.5);

    // No tail after the reference token.
    let third = &records[2];
    assert_eq!(third.remark, "BUDI SANTOSO");
    assert_eq!(third.credit, 75000.0);
}

#[test]
fn test_overlapping_uploads_stay_duplicated() {
    let mut batch = BatchConverter::new();
    batch.ingest_text("feb.txt", FEB_REPORT).unwrap();
    batch.ingest_text("feb_copy.txt", FEB_REPORT).unwrap();

    let merged = batch.finish();
    assert_eq!(merged.len(), 6);
    assert_eq!(merged.records()[0].va_number, merged.records()[3].va_number);
}
