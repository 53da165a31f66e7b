/// Candidate file names for sequence number `i`, in the fixed order
/// they are probed. The first name that exists wins and ends the
/// search for this number. Only `.jpg` is tried; probing every
/// extension for every pattern made the scan an order of magnitude
/// slower for almost no extra matches.
#[must_use]
pub fn candidate_names(i: u32) -> [String; 9] {
    [
        format!("IMG_{i:04}.jpg"),
        format!("IMG_{i:03}.jpg"),
        format!("IMG_{i:02}.jpg"),
        format!("IMG_{i}.jpg"),
        format!("{i:04}.jpg"),
        format!("{i:02}.jpg"),
        format!("{i}.jpg"),
        format!("RIK-{i:04}.jpg"),
        format!("RIK-{i}.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::candidate_names;

    #[test]
    fn fixed_order_for_small_numbers() {
        assert_eq!(
            candidate_names(7),
            [
                "IMG_0007.jpg",
                "IMG_007.jpg",
                "IMG_07.jpg",
                "IMG_7.jpg",
                "0007.jpg",
                "07.jpg",
                "7.jpg",
                "RIK-0007.jpg",
                "RIK-7.jpg",
            ]
        );
    }

    #[test]
    fn wide_numbers_are_not_truncated() {
        let names = candidate_names(12345);
        assert_eq!(names[0], "IMG_12345.jpg");
        assert_eq!(names[4], "12345.jpg");
    }
}
