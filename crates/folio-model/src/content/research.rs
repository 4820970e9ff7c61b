use crate::carousel::CarouselItem;
use crate::research::{LabFact, PipelineStep, Publication, ResearchTeaser};

pub const SCHOLAR_PROFILE_URL: &str = "https://scholar.google.com/citations?user=your-scholar-id";

/// Facts shown under the lab hero title.
pub static LAB_FACTS: [LabFact; 3] = [
    LabFact {
        label: "Primary Focus",
        value: "Deep Learning & Plant Pathology",
        note: None,
    },
    LabFact {
        label: "Current Status",
        value: "MODEL_TRAINING",
        note: Some("Validation Acc: 94%+"),
    },
    LabFact {
        label: "Affiliation",
        value: "University of Ruhuna, Department Of Computer Science",
        note: None,
    },
];

/// The four-stage methodology, in order.
pub static PIPELINE: [PipelineStep; 4] = [
    PipelineStep {
        title: "Data Collection",
        description: "Gathering real-world leaf images of Rice & Chilli crops in diverse field conditions.",
    },
    PipelineStep {
        title: "Preprocessing",
        description: "Data cleaning, augmentation, and labeling to ensure robust model training.",
    },
    PipelineStep {
        title: "Model Design",
        description: "Training Convolutional Neural Networks (CNNs) to identify disease patterns.",
    },
    PipelineStep {
        title: "Evaluation",
        description: "Validating detection accuracy and refining the architecture for real-world use.",
    },
];

/// Slides of the lab's experiment gallery.
pub static RESEARCH_GALLERY: [CarouselItem; 3] = [
    CarouselItem::new(
        "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?auto=format&fit=crop&q=80&w=2072",
        "Rice Leaf Analysis",
    )
    .with_description(
        "High-resolution imagery of rice crops used for training disease detection models.",
    ),
    CarouselItem::new(
        "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2065&auto=format&fit=crop",
        "Chilli Crop Inspection",
    )
    .with_description(
        "Field data collection for chilli plants, capturing various stages of growth and health.",
    ),
    CarouselItem::new(
        "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=2070",
        "CNN Model Architecture",
    )
    .with_description(
        "Visualizing the convolutional neural network pipeline for image processing and classification.",
    ),
];

pub static PUBLICATIONS: [Publication; 2] = [
    Publication {
        title: "Deep CNN for Plant Disease Detection in Rice Crops",
        description: "A novel approach to identifying Brown Spot and Leaf Blast diseases using transfer learning.",
        venue: "IEEE International Conference on Image Processing (ICIP)",
        year: "2025",
        image_url: "https://images.unsplash.com/photo-1581092921462-698338d35393?q=80&w=2070&auto=format&fit=crop",
        scholar_url: "https://scholar.google.com/scholar?q=deep+cnn+plant+disease",
    },
    Publication {
        title: "Scalable Framework for Multi-Crop Disease Classification",
        description: "An extendable architecture for applying CNN-based disease detection to new crop types.",
        venue: "Journal of Agricultural AI",
        year: "2024",
        image_url: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?q=80&w=2070&auto=format&fit=crop",
        scholar_url: "https://scholar.google.com/scholar?q=scalable+framework+crop+disease",
    },
];

pub static RESEARCH_TEASER: ResearchTeaser = ResearchTeaser {
    feature_image: "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?auto=format&fit=crop&q=80&w=2072",
    crops_image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2065&auto=format&fit=crop",
    data_image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=2070",
};
