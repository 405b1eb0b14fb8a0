pub mod d001_maintenance_overview;
