// Export collaborators: serialize a finished analysis into something a person
// downloads. Lists arrive already capped and ordered; nothing here re-sorts.

pub mod report;
