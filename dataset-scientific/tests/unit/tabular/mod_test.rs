use super::*;

#[test]
fn can_read_plain_rows() {
    let content = "first line\n0 0\n1,0\n1;1;5\n0\n0 1\n";

    let data = read_plain_rows(content);

    assert_eq!(data.coordinates(), vec![(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
    assert!(data.demands().is_empty());
}

#[test]
fn can_dispatch_by_format() {
    assert_eq!(read_tabular("[[1, 2]]", Some(DatasetFormat::Json)).unwrap().coordinates(), vec![(1., 2.)]);
    assert_eq!(read_tabular("x,y\n1,2\n", Some(DatasetFormat::Csv)).unwrap().coordinates(), vec![(1., 2.)]);
    assert_eq!(read_tabular("1 2\n", None).unwrap().coordinates(), vec![(1., 2.)]);
}
