//! The bundled catalog data. Everything here is plain static content; the
//! query logic lives in the parent module.

use crate::model::care_service::CareService;
use crate::model::location::{Coordinates, Location};
use crate::model::product::Product;

/// Fixed description per category slug; empty string for unmapped slugs.
pub fn category_description(slug: &str) -> &'static str {
    match slug {
        "mobility-aids" => {
            "Essential walking aids and canes to help maintain independence and mobility in daily life."
        }
        "walkers-rollators" => {
            "Stable walking support devices including standard walkers, rollators, and specialized knee walkers."
        }
        "wheelchairs" => {
            "Comfortable and reliable wheelchairs for both manual and powered mobility needs."
        }
        "hospital-beds" => {
            "Adjustable hospital beds and accessories designed for home care and recovery."
        }
        "lift-chairs" => {
            "Power lift recliners that assist with sitting and standing while providing therapeutic comfort."
        }
        "bathroom-safety" => {
            "Safety equipment to prevent falls and increase independence in the bathroom."
        }
        "hearing-aids" => {
            "Advanced hearing aid solutions for improved hearing and quality of life."
        }
        "oxygen-equipment" => {
            "Respiratory equipment including oxygen concentrators, tanks, and CPAP machines."
        }
        "daily-living-aids" => {
            "Helpful tools and devices that make everyday tasks easier and more manageable."
        }
        _ => "",
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    slug: &str,
    category: &str,
    category_slug: &str,
    description: &str,
    features: &[&str],
    image: &str,
    price_range: &str,
    popular: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        category: category.to_string(),
        category_slug: category_slug.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        image: image.to_string(),
        price_range: price_range.to_string(),
        popular,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        // Mobility Aids
        product(
            "mob-001",
            "Adjustable Aluminum Cane",
            "adjustable-aluminum-cane",
            "Mobility Aids",
            "mobility-aids",
            "Lightweight and durable aluminum cane with adjustable height settings. Features a comfortable ergonomic handle and non-slip rubber tip for enhanced stability and safety.",
            &[
                "Height adjustable from 33\" to 37\"",
                "Supports up to 250 lbs",
                "Ergonomic soft-grip handle reduces hand fatigue",
                "Non-slip rubber tip for traction on various surfaces",
            ],
            "/images/supplies/cane.jpg",
            "$25-45",
            true,
        ),
        product(
            "mob-002",
            "Folding Walking Stick with LED Light",
            "folding-walking-stick-led",
            "Mobility Aids",
            "mobility-aids",
            "Portable folding walking stick with built-in LED light for enhanced visibility and safety during evening walks. Compact design folds to fit in a bag or purse.",
            &[
                "Folds into 4 sections for easy portability",
                "Built-in LED light with long-lasting battery",
                "Anti-shock design reduces joint impact",
                "Wrist strap for added security",
            ],
            "/images/supplies/walking-stick.jpg",
            "$35-55",
            false,
        ),
        product(
            "mob-003",
            "Heavy-Duty Quad Cane",
            "heavy-duty-quad-cane",
            "Mobility Aids",
            "mobility-aids",
            "Extra-stable quad cane with four-point base providing superior balance and support. Ideal for those requiring additional stability during rehabilitation or daily activities.",
            &[
                "Four-point base for maximum stability",
                "Supports up to 300 lbs",
                "Height adjustable with easy push-button mechanism",
                "Can stand upright on its own",
            ],
            "/images/supplies/quad-cane.jpg",
            "$40-65",
            true,
        ),
        // Walkers & Rollators
        product(
            "walk-001",
            "Standard Folding Walker",
            "standard-folding-walker",
            "Walkers & Rollators",
            "walkers-rollators",
            "Classic folding walker with sturdy aluminum frame construction. Provides reliable support for indoor and outdoor use with easy folding mechanism for transport and storage.",
            &[
                "Lightweight aluminum frame (6 lbs)",
                "Folds flat for easy storage",
                "Height adjustable for users 5'4\" to 6'2\"",
                "Non-marring rubber tips protect floors",
            ],
            "/images/supplies/standard-walker.jpg",
            "$60-95",
            true,
        ),
        product(
            "walk-002",
            "Deluxe Rollator with Padded Seat",
            "deluxe-rollator-padded-seat",
            "Walkers & Rollators",
            "walkers-rollators",
            "Premium four-wheel rollator featuring a comfortable padded seat, backrest, and under-seat storage basket. Equipped with easy-to-use loop brakes for added safety and control.",
            &[
                "Padded seat supports up to 300 lbs",
                "8\" wheels for smooth indoor/outdoor use",
                "Easy-pull loop brakes with locking mechanism",
                "Removable storage basket and backrest",
            ],
            "/images/supplies/rollator.jpg",
            "$150-250",
            true,
        ),
        product(
            "walk-003",
            "Knee Walker Scooter",
            "knee-walker-scooter",
            "Walkers & Rollators",
            "walkers-rollators",
            "Innovative knee walker designed for lower leg injuries, providing a comfortable alternative to crutches. Features steerable front wheel and hand brakes for easy maneuverability.",
            &[
                "Contoured knee pad with memory foam",
                "Adjustable height for optimal comfort",
                "Dual hand brakes for precise control",
                "Folds for transport and storage",
            ],
            "/images/supplies/knee-walker.jpg",
            "$120-200",
            false,
        ),
        // Wheelchairs
        product(
            "wheel-001",
            "Lightweight Manual Wheelchair",
            "lightweight-manual-wheelchair",
            "Wheelchairs",
            "wheelchairs",
            "Durable yet lightweight manual wheelchair with comfortable padded armrests and footrests. Features quick-release wheels for easy transport and storage.",
            &[
                "Aircraft-grade aluminum frame (only 36 lbs)",
                "Supports up to 300 lbs",
                "Quick-release 24\" rear wheels",
                "Desk-length padded armrests flip back",
            ],
            "/images/supplies/manual-wheelchair.jpg",
            "$250-450",
            true,
        ),
        product(
            "wheel-002",
            "Transport Chair with Hand Brakes",
            "transport-chair-hand-brakes",
            "Wheelchairs",
            "wheelchairs",
            "Compact transport wheelchair perfect for caregiver-assisted mobility. Lightweight design with companion hand brakes makes it ideal for medical appointments and outings.",
            &[
                "Ultra-lightweight at 19 lbs",
                "12\" rear wheels for tight spaces",
                "Companion-controlled hand brakes",
                "Folds compactly for car storage",
            ],
            "/images/supplies/transport-chair.jpg",
            "$180-280",
            false,
        ),
        product(
            "wheel-003",
            "Premium Power Wheelchair",
            "premium-power-wheelchair",
            "Wheelchairs",
            "wheelchairs",
            "Advanced electric wheelchair with joystick control and long-lasting battery system. Offers superior comfort and independence with customizable seating and controls.",
            &[
                "Up to 15 miles per charge",
                "360-degree joystick control",
                "Adjustable seat, armrests, and footrests",
                "Supports up to 350 lbs",
            ],
            "/images/supplies/electric-scooter.jpg",
            "Call for pricing",
            true,
        ),
        // Hospital Beds
        product(
            "bed-001",
            "Semi-Electric Hospital Bed",
            "semi-electric-hospital-bed",
            "Hospital Beds",
            "hospital-beds",
            "Semi-electric adjustable hospital bed with electric head and foot controls. Manual height adjustment provides cost-effective solution for home care needs.",
            &[
                "Electric head and foot adjustment",
                "Manual height crank adjustment",
                "400 lb weight capacity",
                "Includes side rails and mattress",
            ],
            "/images/supplies/hospital-beds/manual-bed.jpg",
            "$800-1,200",
            true,
        ),
        product(
            "bed-002",
            "Full-Electric Hospital Bed Package",
            "full-electric-hospital-bed-package",
            "Hospital Beds",
            "hospital-beds",
            "Complete hospital bed system with full electric controls for head, foot, and height adjustment. Premium package includes pressure-relief mattress and full-length side rails.",
            &[
                "Full electric adjustment with hand control",
                "Trendelenburg and reverse positioning",
                "Includes therapeutic foam mattress",
                "Tool-free assembly and breakdown",
            ],
            "/images/supplies/hospital-beds/electric-bed.jpg",
            "$1,500-2,500",
            true,
        ),
        product(
            "bed-003",
            "Bed Rails and Safety Accessories Kit",
            "bed-rails-safety-accessories-kit",
            "Hospital Beds",
            "hospital-beds",
            "Comprehensive safety accessory kit including adjustable bed rails, bed stick helper, and organizer pouch. Compatible with most hospital and home beds.",
            &[
                "Adjustable height bed rails",
                "Bed stick assist handle",
                "Bedside organizer with pockets",
                "Easy installation without tools",
            ],
            "/images/supplies/hospital-beds/electric-bed.jpg",
            "$120-220",
            false,
        ),
        // Lift Chairs
        product(
            "lift-001",
            "Power Lift Recliner with Heat and Massage",
            "power-lift-recliner-heat-massage",
            "Lift Chairs",
            "lift-chairs",
            "Luxurious power lift recliner featuring built-in heat therapy and massage functions. Dual motor system allows independent back and footrest control for personalized comfort.",
            &[
                "Dual motor infinite position control",
                "8 massage modes with heat therapy",
                "USB charging port and side pockets",
                "Supports up to 350 lbs",
            ],
            "/images/supplies/lift-chairs/power-lift-recliner.jpg",
            "$800-1,400",
            true,
        ),
        product(
            "lift-002",
            "Zero Gravity Lift Chair",
            "zero-gravity-lift-chair",
            "Lift Chairs",
            "lift-chairs",
            "Therapeutic zero gravity lift chair designed to reduce pressure on the spine and improve circulation. Features premium upholstery and smooth, quiet lifting mechanism.",
            &[
                "Zero gravity positioning technology",
                "Whisper-quiet lift mechanism",
                "Premium breathable fabric",
                "Battery backup for power outages",
            ],
            "/images/supplies/lift-chairs/zero-gravity-chair.jpg",
            "$1,200-1,800",
            true,
        ),
        // Bathroom Safety
        product(
            "bath-001",
            "Grab Bar Installation Kit",
            "grab-bar-installation-kit",
            "Bathroom Safety",
            "bathroom-safety",
            "Professional-grade stainless steel grab bars with complete installation hardware. Available in multiple sizes for shower, bathtub, and toilet area installation.",
            &[
                "Corrosion-resistant stainless steel",
                "Supports up to 500 lbs per bar",
                "Textured grip surface prevents slipping",
                "ADA compliant with all mounting hardware",
            ],
            "/images/supplies/bathroom-safety/grab-bars.jpg",
            "$45-120",
            true,
        ),
        product(
            "bath-002",
            "Adjustable Shower Chair with Arms",
            "adjustable-shower-chair-arms",
            "Bathroom Safety",
            "bathroom-safety",
            "Sturdy shower chair with padded armrests and non-slip feet for secure bathing. Tool-free height adjustment accommodates users of varying heights and mobility needs.",
            &[
                "Padded armrests for added support",
                "6 height adjustment positions",
                "Drainage holes prevent water pooling",
                "300 lb weight capacity",
            ],
            "/images/supplies/bathroom-safety/shower-seat.jpg",
            "$65-110",
            true,
        ),
        product(
            "bath-003",
            "3-in-1 Commode and Shower Chair",
            "3-in-1-commode-shower-chair",
            "Bathroom Safety",
            "bathroom-safety",
            "Versatile 3-in-1 design functions as bedside commode, raised toilet seat, and shower chair. Includes splash guard, bucket with lid, and padded seat for comfort.",
            &[
                "Multi-functional: commode, toilet riser, shower seat",
                "Removable bucket with lid and splash guard",
                "Padded seat and backrest",
                "Rust-resistant aluminum frame",
            ],
            "/images/supplies/bathroom-safety/raised-toilet-seat.jpg",
            "$90-150",
            false,
        ),
        // Hearing Aids
        product(
            "hear-001",
            "Digital Behind-the-Ear Hearing Aid",
            "digital-behind-ear-hearing-aid",
            "Hearing Aids",
            "hearing-aids",
            "Advanced digital hearing aid with noise reduction technology and multiple listening programs. Comfortable behind-the-ear design suitable for mild to severe hearing loss.",
            &[
                "16-channel digital sound processing",
                "Automatic feedback cancellation",
                "4 listening programs for different environments",
                "Telecoil for phone compatibility",
            ],
            "/images/supplies/hearing-aids/behind-ear.jpg",
            "$600-1,200 per pair",
            true,
        ),
        product(
            "hear-002",
            "Nearly Invisible In-the-Ear Hearing Aid",
            "nearly-invisible-in-ear-hearing-aid",
            "Hearing Aids",
            "hearing-aids",
            "Discreet in-the-ear hearing aid custom-fitted to your ear canal. Digital technology provides clear sound amplification while remaining virtually invisible to others.",
            &[
                "Custom-molded for perfect fit",
                "Digital noise reduction",
                "Long-lasting size 312 battery",
                "Suitable for mild to moderate hearing loss",
            ],
            "/images/supplies/hearing-aids/in-ear.jpg",
            "$800-1,500 per pair",
            true,
        ),
        product(
            "hear-003",
            "Rechargeable Bluetooth Hearing Aid",
            "rechargeable-bluetooth-hearing-aid",
            "Hearing Aids",
            "hearing-aids",
            "Modern rechargeable hearing aid with Bluetooth connectivity for direct audio streaming from smartphones and TVs. No battery replacement needed with convenient charging dock.",
            &[
                "Bluetooth streaming from devices",
                "24-hour rechargeable battery",
                "Smartphone app for custom control",
                "Automatic environment adjustment",
            ],
            "/images/supplies/hearing-aids/rechargeable.jpg",
            "$1,200-2,000 per pair",
            true,
        ),
        // Oxygen Equipment
        product(
            "oxy-001",
            "Portable Oxygen Concentrator",
            "portable-oxygen-concentrator",
            "Oxygen Equipment",
            "oxygen-equipment",
            "Lightweight portable oxygen concentrator providing medical-grade oxygen on the go. FAA-approved for air travel with long-lasting battery and multiple flow settings.",
            &[
                "FAA approved for air travel",
                "Up to 8 hours battery life",
                "5 pulse-dose flow settings",
                "Weighs only 4.8 lbs",
            ],
            "/images/supplies/oxygen/portable-concentrator.jpg",
            "Call for pricing",
            true,
        ),
        product(
            "oxy-002",
            "Home Oxygen Tank System",
            "home-oxygen-tank-system",
            "Oxygen Equipment",
            "oxygen-equipment",
            "Complete home oxygen system with large capacity tank and adjustable flow regulator. Includes nasal cannula, tubing, and all necessary accessories for home oxygen therapy.",
            &[
                "High-capacity oxygen storage",
                "Adjustable flow rate 0-15 LPM",
                "Includes delivery service and refills",
                "Safety features and pressure gauge",
            ],
            "/images/supplies/oxygen/oxygen-tank.jpg",
            "Call for pricing",
            false,
        ),
        product(
            "oxy-003",
            "Auto CPAP Machine with Humidifier",
            "auto-cpap-machine-humidifier",
            "Oxygen Equipment",
            "oxygen-equipment",
            "Advanced auto-adjusting CPAP machine for sleep apnea treatment with integrated heated humidifier. Features data tracking and quiet operation for better sleep quality.",
            &[
                "Auto-adjusting pressure technology",
                "Heated humidifier prevents dryness",
                "Sleep data tracking and reporting",
                "Whisper-quiet operation (26 dB)",
            ],
            "/images/supplies/oxygen/cpap-machine.jpg",
            "$600-1,200",
            true,
        ),
        // Daily Living Aids
        product(
            "daily-001",
            "32-Inch Reacher Grabber Tool",
            "32-inch-reacher-grabber-tool",
            "Daily Living Aids",
            "daily-living-aids",
            "Ergonomic reacher tool with rotating head and magnetic tip for picking up items without bending or stretching. Lightweight design with comfortable grip reduces strain on hands and back.",
            &[
                "32-inch reach eliminates bending",
                "Jaw opens to 4 inches wide",
                "Magnetic tip for metal objects",
                "Rubberized grip for secure holding",
            ],
            "/images/supplies/daily-living/reacher-grabber.jpg",
            "$15-30",
            true,
        ),
        product(
            "daily-002",
            "Weekly Medication Organizer System",
            "weekly-medication-organizer-system",
            "Daily Living Aids",
            "daily-living-aids",
            "Large-capacity pill organizer with four daily compartments for morning, noon, evening, and bedtime doses. Clear lids and large print labels ensure proper medication management.",
            &[
                "28 individual compartments (7 days x 4 times)",
                "Large compartments hold multiple pills",
                "BPA-free with secure snap closures",
                "Removable daily trays for on-the-go",
            ],
            "/images/supplies/daily-living/pill-organizer.jpg",
            "$12-25",
            true,
        ),
        product(
            "daily-003",
            "LED Illuminated Magnifying Glass",
            "led-illuminated-magnifying-glass",
            "Daily Living Aids",
            "daily-living-aids",
            "High-quality magnifying glass with bright LED lights for enhanced visibility when reading small print, labels, or doing detail work. Features both handheld and standing positions.",
            &[
                "3X and 10X magnification options",
                "12 energy-efficient LED lights",
                "Converts to hands-free stand",
                "Perfect for reading, hobbies, and inspection",
            ],
            "/images/supplies/daily-living/magnifier.jpg",
            "$25-45",
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn location(
    slug: &str,
    name: &str,
    region: &str,
    description: &str,
    zip_codes: &[&str],
    neighborhoods: &[&str],
    lat: f64,
    lng: f64,
) -> Location {
    Location {
        slug: slug.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        description: description.to_string(),
        zip_codes: zip_codes.iter().map(|z| z.to_string()).collect(),
        neighborhoods: neighborhoods.iter().map(|n| n.to_string()).collect(),
        coordinates: Coordinates { lat, lng },
    }
}

pub fn locations() -> Vec<Location> {
    vec![
        location(
            "san-diego",
            "San Diego",
            "Central San Diego",
            "Serving the heart of San Diego with comprehensive home health care services.",
            &[
                "92101", "92102", "92103", "92104", "92105", "92108", "92110", "92111",
                "92115", "92116", "92120",
            ],
            &[
                "Downtown",
                "Hillcrest",
                "North Park",
                "Mission Hills",
                "Normal Heights",
                "Kensington",
            ],
            32.7157,
            -117.1611,
        ),
        location(
            "la-jolla",
            "La Jolla",
            "Coastal North County",
            "Premium home health care services for the La Jolla community.",
            &["92037", "92038", "92039"],
            &[
                "La Jolla Village",
                "La Jolla Shores",
                "Bird Rock",
                "Windansea",
                "Upper Hermosa",
            ],
            32.8328,
            -117.2713,
        ),
        location(
            "del-mar",
            "Del Mar",
            "Coastal North County",
            "Compassionate home care serving the Del Mar community.",
            &["92014"],
            &["Del Mar Village", "Del Mar Heights", "Carmel Valley"],
            32.9595,
            -117.2653,
        ),
        location(
            "encinitas",
            "Encinitas",
            "Coastal North County",
            "Expert home health care for Encinitas residents and families.",
            &["92007", "92023", "92024"],
            &["Leucadia", "Cardiff-by-the-Sea", "Olivenhain", "New Encinitas"],
            33.0369,
            -117.2920,
        ),
        location(
            "carlsbad",
            "Carlsbad",
            "Coastal North County",
            "Quality home health services throughout Carlsbad.",
            &["92008", "92009", "92010", "92011"],
            &["Carlsbad Village", "La Costa", "Aviara", "Bressi Ranch"],
            33.1581,
            -117.3506,
        ),
        location(
            "oceanside",
            "Oceanside",
            "Coastal North County",
            "Dedicated home care providers serving Oceanside families.",
            &["92049", "92051", "92052", "92054", "92056", "92057", "92058"],
            &[
                "Downtown Oceanside",
                "San Luis Rey",
                "Fire Mountain",
                "South Oceanside",
            ],
            33.1959,
            -117.3795,
        ),
        location(
            "escondido",
            "Escondido",
            "Inland North County",
            "Trusted home health care services for Escondido residents.",
            &["92025", "92026", "92027", "92029", "92030", "92046"],
            &[
                "Downtown Escondido",
                "Rancho San Pasqual",
                "Hidden Meadows",
                "Felicita",
            ],
            33.1192,
            -117.0864,
        ),
        location(
            "poway",
            "Poway",
            "Inland San Diego",
            "Professional home care services for the Poway community.",
            &["92064", "92074"],
            &["Old Poway", "South Poway", "Green Valley"],
            32.9628,
            -117.0359,
        ),
        location(
            "chula-vista",
            "Chula Vista",
            "South Bay",
            "Comprehensive home health care serving Chula Vista.",
            &["91909", "91910", "91911", "91912", "91913", "91914", "91915"],
            &["Eastlake", "Otay Ranch", "Rolling Hills Ranch", "Bonita"],
            32.6401,
            -117.0842,
        ),
        location(
            "coronado",
            "Coronado",
            "Coastal San Diego",
            "Elite home health care for Coronado Island residents.",
            &["92118", "92178"],
            &["Coronado Village", "Coronado Cays", "Silver Strand"],
            32.6859,
            -117.1831,
        ),
        location(
            "rancho-bernardo",
            "Rancho Bernardo",
            "Inland North County",
            "Quality home care services for Rancho Bernardo seniors.",
            &["92127", "92128"],
            &["Westwood", "High Country", "Oaks North"],
            33.0174,
            -117.0731,
        ),
        location(
            "rancho-santa-fe",
            "Rancho Santa Fe",
            "Inland North County",
            "Exclusive home health care for Rancho Santa Fe families.",
            &["92067", "92091"],
            &["The Covenant", "Fairbanks Ranch", "Cielo"],
            33.0192,
            -117.2019,
        ),
        location(
            "san-marcos",
            "San Marcos",
            "Inland North County",
            "Reliable home health services in San Marcos.",
            &["92069", "92078", "92079", "92096"],
            &["Discovery Hills", "Lake San Marcos", "San Elijo Hills"],
            33.1434,
            -117.1661,
        ),
        location(
            "vista",
            "Vista",
            "Inland North County",
            "Caring home health providers serving Vista.",
            &["92081", "92083", "92084", "92085"],
            &["Shadowridge", "Buena Creek", "Vista Village"],
            33.2000,
            -117.2425,
        ),
        location(
            "solana-beach",
            "Solana Beach",
            "Coastal North County",
            "Premium home care services in Solana Beach.",
            &["92075"],
            &["Cedros Design District", "Via de la Valle", "Eden Gardens"],
            32.9912,
            -117.2712,
        ),
    ]
}

fn care_service(
    slug: &str,
    title: &str,
    short_description: &str,
    full_description: &str,
    icon: &str,
    features: &[&str],
) -> CareService {
    CareService {
        slug: slug.to_string(),
        title: title.to_string(),
        short_description: short_description.to_string(),
        full_description: full_description.to_string(),
        icon: icon.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn care_services() -> Vec<CareService> {
    vec![
        care_service(
            "home-care",
            "Home Care",
            "Whether you need a companion or personal care a few times a week or 24 hours a day, let us be your home care solution.",
            "Seniors sometimes require extra assistance with day-to-day activities, and nonmedical home care can offer that help. At-home care allows them to remain comfortable in their own environment, helping seniors age in place for longer. With the flexibility of Home Care, complex medical management plans and lifestyle routines can be catered to the senior's ideals. Categories include companionship services, bathing and dressing support, meal preparation, incontinence management, activities of daily living (ADL), and more.",
            "home",
            &[
                "Bathing and dressing assistance",
                "Incontinence care",
                "Constant safety monitoring",
                "Meal preparation",
                "Light housekeeping",
                "Errands and transportation",
            ],
        ),
        care_service(
            "personal-care",
            "24-Hour Home Care",
            "24-hour home care for those recovering from illness, with Alzheimer's or dementia, or limited mobility, providing safety and comfort.",
            "24-hour home care often makes the most sense for recovering from an illness, those with Alzheimer's or dementia, or those with limited mobility, providing safety and comfort around the clock. Our team offers hourly caregiver and nursing rates, as well as 24-hour care available at a reduced daily rate. We ensure continuous, compassionate care that allows your loved one to remain in the familiar surroundings of home.",
            "heart",
            &[
                "Round-the-clock supervision",
                "Overnight care available",
                "Fall prevention and safety",
                "Medication reminders",
                "Personal care assistance",
                "Companionship and engagement",
            ],
        ),
        care_service(
            "respite-care",
            "Respite Care",
            "Temporary relief for family caregivers to rest and recharge while your loved one receives quality care.",
            "Respite care provides temporary relief for primary caregivers. Whether you need a few hours, days, or weeks, our professional caregivers step in to ensure your loved one receives continuous, quality care while you take a well-deserved break. We understand the demands of caregiving and are here to support both you and your family member.",
            "clock",
            &[
                "Flexible scheduling options",
                "Short-term or long-term relief",
                "Overnight and weekend care",
                "Emergency respite available",
                "Seamless transition support",
                "Consistent caregiver matching",
            ],
        ),
        care_service(
            "hospice-support",
            "Hospice Support",
            "We offer hospice care supplemental to home health and nurse visits, providing hourly, overnight, and 24-hour support.",
            "We offer hospice care in San Diego supplemental to home health and nurse visits. We offer hourly, overnight, and 24-hour in home care when around-the-clock support is needed. Our compassionate caregivers focus on comfort, dignity, and emotional support for both patients and their families during this difficult time.",
            "hand-holding-heart",
            &[
                "Comfort and pain management support",
                "Emotional and spiritual support",
                "Family respite care",
                "24/7 availability",
                "Coordination with hospice teams",
                "Bereavement support",
            ],
        ),
        care_service(
            "skilled-nursing",
            "Skilled Nursing",
            "Our nurses are passionate about providing the highest quality of care, complementing our non-medical care services.",
            "Our nurses are passionate about providing the highest quality of care. Skilled nursing care complements our non-medical care services, helping to ensure the highest quality of life. Our registered nurses and licensed vocational nurses assist with case management, medication administration, wound care, feeding tubes, injections, and more.",
            "stethoscope",
            &[
                "RN care management",
                "Medication administration",
                "Wound care and dressing changes",
                "IV therapy and infusions",
                "Feeding tube management",
                "Post-surgical care",
            ],
        ),
        care_service(
            "specialty-services",
            "Specialty Services",
            "Specialized care for Alzheimer's, dementia, Parkinson's, stroke recovery, and VA community support.",
            "Happy Home Care specializes in providing Alzheimer's care, dementia care, and more in the familiar surroundings and comfort of your loved one's own home. We also offer Parkinson's disease support, stroke rehabilitation, geriatric care management, and are proud to serve our nation's veterans as a credentialed member of the VA Community Care Network (CCN).",
            "brain",
            &[
                "Alzheimer's and dementia certified care",
                "Parkinson's disease support",
                "Stroke rehabilitation",
                "Geriatric care management",
                "VA community support",
                "Fall reduction programs",
            ],
        ),
    ]
}
