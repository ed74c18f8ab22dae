//! Campus map data set
//!
//! Named locations with their pixel position on the campus map image, and the walking paths
//! between them. Distances are walking costs along the paths, not pixel lengths.

use crate::errors::GraphError;
use crate::graph::Graph;

use log::{debug, warn};


/// `(name, top, left)` of every location on the map
pub const NODES: &[(&str, f64, f64)] = &[
    ("Poço", 375.0, 1025.0),
    ("Refeitório", 545.0, 2070.0),
    ("Ginásio", 720.0, 2480.0),
    ("Cantina", 750.0, 1470.0),
    ("Rua1", 640.0, 1340.0),
    ("RuaPrincipal", 1000.0, 1445.0),
    ("Biblioteca", 660.0, 1200.0),
    ("Pedagógico", 920.0, 1220.0),
    ("M04", 910.0, 1300.0),
    ("M06", 870.0, 1290.0),
    ("M08", 830.0, 1280.0),
    ("M17", 790.0, 1270.0),
    ("M18", 750.0, 1260.0),
    ("M14", 870.0, 1220.0),
    ("M12", 830.0, 1210.0),
    ("M22", 790.0, 1200.0),
    ("M19", 750.0, 1190.0),
    ("Auditório", 750.0, 850.0),
    ("Laboratórios", 970.0, 710.0),
    ("H01", 1050.0, 750.0),
    ("H02", 1055.0, 710.0),
    ("H03", 1060.0, 670.0),
    ("H04", 1030.0, 640.0),
    ("H05", 990.0, 630.0),
    ("H06", 950.0, 620.0),
    ("H07", 900.0, 640.0),
    ("H08", 890.0, 680.0),
    ("H09", 850.0, 630.0),
    ("H10", 840.0, 670.0),
    ("Bosque", 1250.0, 2300.0),
    ("Guarita", 1440.0, 1580.0),
    ("Administrativo", 1280.0, 1310.0),
    ("SalasSaidaSuperior", 800.0, 1060.0),
    ("SalasDeAula", 1150.0, 1150.0),
    ("BlocoA", 1050.0, 1100.0),
    ("A01", 980.0, 1040.0),
    ("A02", 930.0, 1035.0),
    ("A03", 880.0, 1030.0),
    ("A04", 880.0, 1110.0),
    ("A05", 930.0, 1120.0),
    ("A06", 980.0, 1125.0),
    ("BlocoC", 1160.0, 1000.0),
    ("C03", 1230.0, 900.0),
    ("C04", 1240.0, 850.0),
    ("C05", 1250.0, 800.0),
    ("C06", 1170.0, 790.0),
    ("C07", 1165.0, 840.0),
    ("C08", 1160.0, 890.0),
    ("BlocoE", 1220.0, 720.0),
    ("E01", 1280.0, 640.0),
    ("E02", 1290.0, 590.0),
    ("E03", 1300.0, 540.0),
    ("E04", 1310.0, 490.0),
    ("E05", 1220.0, 480.0),
    ("E06", 1210.0, 530.0),
    ("E07", 1200.0, 580.0),
    ("E08", 1190.0, 630.0),
];

/// `(from, to, distance)` of every walking path
pub const EDGES: &[(&str, &str, f64)] = &[
    ("Refeitório", "Ginásio", 8100.0),
    ("Ginásio", "Bosque", 8500.0),
    ("Bosque", "Guarita", 13500.0),
    ("RuaPrincipal", "Pedagógico", 4200.0),
    ("RuaPrincipal", "Guarita", 7700.0),
    ("RuaPrincipal", "Rua1", 5600.0),
    ("RuaPrincipal", "Cantina", 4200.0),
    ("RuaPrincipal", "SalasDeAula", 5100.0),
    ("RuaPrincipal", "Administrativo", 5000.0),
    ("Guarita", "Administrativo", 4500.0),
    ("Pedagógico", "Administrativo", 6200.0),
    ("Pedagógico", "SalasDeAula", 4200.0),
    ("Pedagógico", "M04", 800.0),
    ("M04", "M06", 200.0),
    ("M06", "M08", 200.0),
    ("M08", "M17", 200.0),
    ("M17", "M18", 200.0),
    ("M18", "M19", 200.0),
    ("M19", "M22", 200.0),
    ("M22", "M12", 200.0),
    ("M12", "M14", 200.0),
    ("M22", "M17", 200.0),
    ("M12", "M08", 200.0),
    ("M14", "M06", 200.0),
    ("M14", "Pedagógico", 800.0),
    ("SalasDeAula", "Laboratórios", 8400.0),
    ("Laboratórios", "Auditório", 4200.0),
    ("Laboratórios", "H01", 500.0),
    ("Laboratórios", "H02", 550.0),
    ("Laboratórios", "H03", 600.0),
    ("Laboratórios", "H04", 550.0),
    ("Laboratórios", "H05", 500.0),
    ("Laboratórios", "H06", 550.0),
    ("Laboratórios", "H07", 650.0),
    ("Laboratórios", "H08", 600.0),
    ("H01", "H02", 200.0),
    ("H02", "H03", 200.0),
    ("H03", "H04", 200.0),
    ("H04", "H05", 200.0),
    ("H05", "H06", 200.0),
    ("H06", "H07", 300.0),
    ("H07", "H08", 200.0),
    ("H07", "H09", 200.0),
    ("H08", "H10", 200.0),
    ("H09", "H10", 200.0),
    ("SalasDeAula", "BlocoA", 2000.0),
    ("SalasDeAula", "BlocoC", 2000.0),
    ("BlocoA", "A01", 500.0),
    ("BlocoA", "A06", 500.0),
    ("A06", "A05", 200.0),
    ("A05", "A04", 200.0),
    ("A01", "A02", 200.0),
    ("A02", "A03", 200.0),
    ("A03", "A04", 300.0),
    ("A02", "A05", 300.0),
    ("A01", "A06", 300.0),
    ("A04", "SalasSaidaSuperior", 500.0),
    ("A03", "SalasSaidaSuperior", 500.0),
    ("BlocoC", "C03", 500.0),
    ("BlocoC", "C08", 500.0),
    ("C03", "C04", 200.0),
    ("C04", "C05", 200.0),
    ("C08", "C07", 200.0),
    ("C07", "C06", 200.0),
    ("C03", "C08", 300.0),
    ("C04", "C07", 300.0),
    ("C05", "C06", 300.0),
    ("C06", "BlocoE", 400.0),
    ("C05", "BlocoE", 400.0),
    ("BlocoE", "E01", 500.0),
    ("BlocoE", "E08", 500.0),
    ("E01", "E02", 200.0),
    ("E02", "E03", 200.0),
    ("E03", "E04", 200.0),
    ("E04", "E05", 300.0),
    ("E05", "E06", 200.0),
    ("E06", "E07", 200.0),
    ("E07", "E08", 200.0),
    ("E03", "E06", 300.0),
    ("E02", "E07", 300.0),
    ("E01", "E08", 300.0),
    ("SalasSaidaSuperior", "Biblioteca", 4000.0),
    ("SalasSaidaSuperior", "Auditório", 3500.0),
    ("Biblioteca", "Poço", 5500.0),
    ("Biblioteca", "Auditório", 5600.0),
    ("Biblioteca", "Rua1", 2000.0),
    ("Refeitório", "Rua1", 11000.0),
    ("Cantina", "Rua1", 2100.0),
];


/// Build the campus graph from [`NODES`] and [`EDGES`]
/// Paths shorter than the straight line between their endpoints are logged, not corrected
pub fn graph() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();

    for &(id, top, left) in NODES {
        graph.add_node(id, top, left);
    }
    for &(from, to, distance) in EDGES {
        graph.add_edge(from, to, distance)?;
    }

    for edge in graph.heuristic_violations() {
        warn!("path `{}` - `{}` ({}) is shorter than the straight line between them",
            edge.from, edge.to, edge.distance);
    }

    debug!("built campus graph with {} nodes and {} edges", graph.node_count(), graph.edge_count());
    Ok(graph)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_graph() {
        let graph = graph().unwrap();
        assert_eq!(graph.node_count(), NODES.len());
        assert_eq!(graph.edge_count(), EDGES.len());
        assert_eq!(graph.heuristic_violations().count(), 0);
    }

    #[test]
    fn test_every_location_is_connected() {
        let graph = graph().unwrap();
        assert!(graph.all_nodes().all(|node| !graph.neighbors(node.id.as_str()).unwrap().is_empty()));
    }
}
