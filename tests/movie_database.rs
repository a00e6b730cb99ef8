use std::io::Cursor;

use incidence_graph::DebugInvariants;
use incidence_graph::graph_error::GraphError;
use incidence_graph::io::movies::{KEVIN_BACON, LoadOptions, MovieDatabase};
use incidence_graph::topology::graph::Graph;

const SMALL_DB: &str = "\
Footloose (1984)/Bacon, Kevin/Singer, Lori
Flashdance (1983)/Beals, Jennifer/Nouri, Michael
The Lost Boys (1987)/Nouri, Michael/Singer, Lori
";

fn load(text: &str) -> MovieDatabase {
    MovieDatabase::read(Cursor::new(text)).unwrap()
}

#[test]
fn names_map_to_single_vertices() {
    let db = load(SMALL_DB);
    let g = db.graph();
    // 3 movies + 4 distinct actors
    assert_eq!(g.vertex_count(), 7);
    // two edges per (movie, actor) pair
    assert_eq!(g.edge_count(), 12);
    g.validate_invariants().unwrap();

    let lori = db.find("Singer, Lori").unwrap();
    assert_eq!(db.name(lori).unwrap(), "Singer, Lori");
    assert_eq!(g.outgoing(lori).unwrap().len(), 2);
    assert_eq!(g.incoming(lori).unwrap().len(), 2);
}

#[test]
fn edges_carry_relation_names() {
    let db = load("M/A\n");
    let g = db.graph();
    let (m, a) = (db.find("M").unwrap(), db.find("A").unwrap());
    let features = g.find_edge(m, a).unwrap().unwrap();
    let acts_in = g.find_edge(a, m).unwrap().unwrap();
    assert_eq!(g.edge(features).unwrap(), "features");
    assert_eq!(g.edge(acts_in).unwrap(), "acts in");
}

#[test]
fn custom_options() {
    let opts = LoadOptions {
        separator: '|',
        movie_to_actor: "stars".into(),
        ..Default::default()
    };
    let db = MovieDatabase::read_with(Cursor::new("M|A|B\n"), &opts).unwrap();
    let g = db.graph();
    let e = g
        .find_edge(db.find("M").unwrap(), db.find("B").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(g.edge(e).unwrap(), "stars");
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn blank_lines_and_empty_fields_are_skipped() {
    let db = load("\nM//A/\n\n");
    assert_eq!(db.graph().vertex_count(), 2);
    assert_eq!(db.graph().edge_count(), 2);
    assert!(db.find("").unwrap_err().is_not_found());
}

#[test]
fn movie_only_record_creates_isolated_vertex() {
    let db = load("Lonely Movie\n");
    let m = db.find("Lonely Movie").unwrap();
    assert!(db.graph().outgoing(m).unwrap().is_empty());
}

#[test]
fn repeated_actor_in_one_movie_is_skipped() {
    let db = load("M/A/A\nM/A\n");
    assert_eq!(db.graph().vertex_count(), 2);
    assert_eq!(db.graph().edge_count(), 2);
}

#[test]
fn actor_named_like_movie_is_skipped() {
    let db = load("Same/Same/Other\n");
    assert_eq!(db.graph().vertex_count(), 2);
    assert_eq!(db.graph().edge_count(), 2);
}

#[test]
fn empty_title_is_a_parse_error() {
    let err = MovieDatabase::read(Cursor::new("M/A\n/B\n")).unwrap_err();
    assert_eq!(
        err,
        GraphError::Parse {
            line: 2,
            message: "record has an empty movie title".into()
        }
    );
}

#[test]
fn shortest_path_by_name() {
    let mut db = load(SMALL_DB);
    let path = db
        .shortest_path(KEVIN_BACON, "Beals, Jennifer")
        .unwrap()
        .unwrap();
    assert_eq!(
        db.path_names(&path).unwrap(),
        vec![
            "Beals, Jennifer",
            "Flashdance (1983)",
            "Nouri, Michael",
            "The Lost Boys (1987)",
            "Singer, Lori",
            "Footloose (1984)",
            "Bacon, Kevin",
        ]
    );
    assert_eq!(path.hops(), 3);
}

#[test]
fn missing_target_reported_before_missing_source() {
    let mut db = load("M/A\n");
    assert_eq!(
        db.shortest_path(KEVIN_BACON, "Nobody").unwrap_err(),
        GraphError::NotFound("Nobody".into())
    );
    assert_eq!(
        db.shortest_path(KEVIN_BACON, "A").unwrap_err(),
        GraphError::NotFound(KEVIN_BACON.into())
    );
}

#[test]
fn open_missing_file_is_io_error() {
    let err = MovieDatabase::open("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}

#[test]
fn latin1_bytes_are_decoded_lossily() {
    let bytes: &[u8] = b"Footloose (1984)/Bacon, Kevin\r\nAm\xe9lie (2001)/Tautou, Audrey\n";
    let db = MovieDatabase::read(Cursor::new(bytes)).unwrap();
    assert_eq!(db.graph().vertex_count(), 4);
    let amelie = db.find("Am\u{fffd}lie (2001)").unwrap();
    assert_eq!(db.graph().outgoing(amelie).unwrap().len(), 1);
    // CRLF line endings are stripped
    assert!(db.find_actor(KEVIN_BACON).is_ok());
}

#[test]
fn movie_titles_are_not_search_endpoints() {
    let mut db = load("M1/Bacon, Kevin/A\nM2/A/B\n");
    assert!(db.find("M2").is_ok());
    assert_eq!(db.find_actor("M2").unwrap_err(), GraphError::NotFound("M2".into()));
    assert_eq!(
        db.shortest_path(KEVIN_BACON, "M2").unwrap_err(),
        GraphError::NotFound("M2".into())
    );
    assert_eq!(
        db.shortest_path("M1", "B").unwrap_err(),
        GraphError::NotFound("M1".into())
    );
    let path = db.shortest_path(KEVIN_BACON, "B").unwrap().unwrap();
    assert_eq!(path.hops(), 2);
}
