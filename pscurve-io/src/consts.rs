pub const HIST_SUFFIX: &str = "_hist_genome_wide_cp.txt";
pub const IOLR_HIST_SUFFIX: &str = "_iolr_hist_genome_wide_cp.txt";
pub const POSSIBLE_SUFFIX: &str = "_possible_contacts.txt";
pub const FIT_SUMMARY_SUFFIX: &str = "_fits.json";
pub const GZ_EXTENSION: &str = ".gz";
