mod drafts_w_keel;
mod mean_draft;
mod mean_of_means;
mod pp_corrections;
//
pub use drafts_w_keel::DraftsWKeel;
pub use mean_draft::MeanDraft;
pub use mean_of_means::MeanOfMeans;
pub use pp_corrections::PpCorrections;
