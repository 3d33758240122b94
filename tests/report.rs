use std::fs;
use std::path::Path;

use camino::Utf8PathBuf;

use idr_study_parser::report::AnnotationObject;
use idr_study_parser::schema::SchemaRegistry;
use idr_study_parser::study::ParsedStudy;

fn screen_study() -> String {
    [
        "Comment[IDR Study Accession]\tidr0002",
        "Study Title\tA screening study",
        "Study Description\tA genome-wide screen",
        "Study Type\thigh content screen",
        "Study Publication Title\tScreen paper\tFollow-up paper",
        "Study Author List\tJones K\tJones K, Smith J",
        "Study Organism\tHomo sapiens",
        "Study PubMed ID\t11111\t22222",
        "Study License\tCC BY 4.0",
        "Study License URL\thttps://creativecommons.org/licenses/by/4.0/",
        "Study Data Publisher\tUniversity of Dundee",
        "Study Screens Number\t1",
        "",
        "Screen Number\t1",
        "Comment[IDR Screen Name]\tidr0002-jones-screens/screenA",
        "Screen Description\tAn siRNA screen",
        "Screen Imaging Method\tfluorescence microscopy",
        "Screen Type\tprimary screen",
        "Screen Technology Type\tRNAi screen",
    ]
    .join("\n")
}

fn write_study(dir: &Path, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.join("study.txt")).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn report_objects_from_parsed_study() {
    let temp = tempfile::tempdir().unwrap();
    let path = write_study(temp.path(), &screen_study());
    let component_dir = temp.path().join("screenA");
    fs::create_dir(&component_dir).unwrap();
    fs::write(component_dir.join("idr0002-screenA-annotation.csv"), b"csv").unwrap();

    let parsed = ParsedStudy::from_file(&SchemaRegistry, &path).unwrap();
    let object = AnnotationObject::build(&parsed.components[0]).unwrap();

    assert_eq!(object.name, "idr0002-jones-screens/screenA");
    assert_eq!(
        object.description,
        "Publication Title\nScreen paper\tFollow-up paper\n\n\
         Screen Description\nAn siRNA screen"
    );

    let labels: Vec<&str> = object.map.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Study Type",
            "Organism",
            "Screen Type",
            "Screen Technology Type",
            "Imaging Method",
            // one publication block per reconciled publication, in order
            "Publication Title",
            "Publication Authors",
            "Pubmed ID",
            "Publication Title",
            "Publication Authors",
            "Pubmed ID",
            "License",
            "Data Publisher",
            "Annotation File",
        ]
    );

    let pubmed_values: Vec<&str> = object
        .map
        .iter()
        .filter(|(label, _)| label == "Pubmed ID")
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(
        pubmed_values,
        [
            "11111 https://www.ncbi.nlm.nih.gov/pubmed/11111",
            "22222 https://www.ncbi.nlm.nih.gov/pubmed/22222",
        ]
    );

    let annotation = object.map.last().unwrap();
    assert_eq!(
        annotation.1,
        "https://github.com/IDR/idr-metadata/blob/master/\
         idr0002-jones-screens/screenA/idr0002-screenA-annotation.csv"
    );
}

#[test]
fn report_tolerates_missing_optional_fields() {
    let temp = tempfile::tempdir().unwrap();
    let contents = screen_study()
        .replace("Study License\tCC BY 4.0\n", "")
        .replace(
            "Study License URL\thttps://creativecommons.org/licenses/by/4.0/\n",
            "",
        )
        .replace("Study Data Publisher\tUniversity of Dundee\n", "");
    let path = write_study(temp.path(), &contents);

    let parsed = ParsedStudy::from_file(&SchemaRegistry, &path).unwrap();
    let object = AnnotationObject::build(&parsed.components[0]).unwrap();
    assert!(
        object
            .map
            .iter()
            .all(|(label, _)| label != "License" && label != "Data Publisher")
    );
}
