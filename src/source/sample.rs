use crate::models::{row::Row, row_kind::RowKind, worker::Worker::*};

/// Development ledger used when no source file is configured.
pub fn sample_rows() -> Vec<Row> {
    vec![
        Row::new(RowKind::Earnings)
            .with(Hengi, 80.0)
            .with(Marleni, 200.0)
            .with(Israel, 100.0)
            .with(Thaicar, 500.0),
        Row::new(RowKind::Service)
            .with(Hengi, "IMPRESION SEÑOR")
            .with(Marleni, "DIGITACION DIONICIO")
            .with(Israel, "IMPRESION DANILO")
            .with(Thaicar, "BONO ENTRENAMIENTO"),
        Row::new(RowKind::Earnings)
            .with(Hengi, 500.0)
            .with(Marleni, 500.0)
            .with(Israel, 500.0)
            .with(Thaicar, 200.0),
        Row::new(RowKind::Service)
            .with(Hengi, "TRADUCCION SEÑOR")
            .with(Marleni, "DOCUMENTO GREY")
            .with(Israel, "MATRICULA EDITABLE")
            .with(Thaicar, "CV DEL ING. JOHNNY"),
        Row::new(RowKind::Earnings)
            .with(Hengi, 20.0)
            .with(Israel, 150.0),
        Row::new(RowKind::Service).with(Israel, "INSTANCIA ING. JOHNNY"),
        Row::new(RowKind::Earnings).with(Israel, 1000.0),
        Row::new(RowKind::Service).with(Israel, "SEÑOR BERNARDO"),
        Row::new(RowKind::Earnings).with(Israel, 200.0),
        Row::new(RowKind::Service).with(Israel, "SEÑOR JACINTO"),
        Row::new(RowKind::Earnings)
            .with(Marleni, 100.0)
            .with(Israel, 650.0)
            .with(Thaicar, 100.0),
        Row::new(RowKind::Service)
            .with(Israel, "INSTALACION MICROSOFT WORD")
            .with(Thaicar, "COMPLETIVO"),
        Row::new(RowKind::Total)
            .with(Hengi, 600.0)
            .with(Marleni, 700.0)
            .with(Israel, 1950.0)
            .with(Thaicar, 700.0),
        Row::new(RowKind::Earnings)
            .with(Hengi, 300.0)
            .with(Marleni, 350.0)
            .with(Israel, 975.0)
            .with(Thaicar, 350.0),
        Row::new(RowKind::Share)
            .with(Hengi, "50.%")
            .with(Marleni, "50.%")
            .with(Israel, "50.%")
            .with(Thaicar, "50.%"),
    ]
}
