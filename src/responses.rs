//! Canned Responses
//!
//! Advisory bodies for each topic plus the composers that splice localized
//! section labels into them. Long-form bodies are English only.

use crate::knowledge::{CropEntry, DiseaseRecord};
use crate::localization::SectionLabels;

const IMMEDIATE_ACTIONS: &str = "**Immediate Actions:**
1. Isolate affected plants if possible
2. Remove and dispose of infected plant material
3. Apply recommended treatment immediately
4. Monitor surrounding plants closely

Need more specific guidance or have questions about application methods?";

/// Diagnosis card for a matched disease record.
pub fn disease_report(record: &DiseaseRecord, labels: &SectionLabels) -> String {
    format!(
        "{identified} **{disease} in {crop}** {emoji}\n\n\
         **{treatment_label}**\n{treatment}\n\n\
         **{prevention_label}**\n{prevention}\n\n\
         **{severity_label}** {severity}\n\n\
         {actions}",
        identified = labels.disease_identified,
        disease = record.spoken_name().to_uppercase(),
        crop = record.crop.to_uppercase(),
        emoji = record.severity.emoji(),
        treatment_label = labels.treatment_recommendation,
        treatment = record.treatment,
        prevention_label = labels.prevention_tips,
        prevention = record.prevention,
        severity_label = labels.severity,
        severity = record.severity.as_str().to_uppercase(),
        actions = IMMEDIATE_ACTIONS,
    )
}

/// Cultivation guide for a crop mentioned without a recognizable disease.
pub fn crop_guide(crop: &CropEntry) -> String {
    match &crop.advice {
        Some(advice) => advice.clone(),
        None => format!(
            "**{upper} Information**\n\n\
             I can help you with {name} cultivation. Please specify what you'd like to know:\n\
             - Disease identification and treatment\n\
             - Planting and care instructions\n\
             - Pest management\n\
             - Harvesting guidelines\n\
             - Nutrition requirements\n\n\
             What specific aspect of {name} farming interests you?",
            upper = crop.name.to_uppercase(),
            name = crop.name,
        ),
    }
}

/// A body whose bold title line is a localized label.
pub fn titled(label: &str, emoji: &str, body: &str) -> String {
    format!("**{}** {}{}", label, emoji, body)
}

pub const WEATHER: &str = r#"**Weather & Climate Information** 🌤️

For optimal crop growth, consider these weather factors:
- **Temperature**: Most crops prefer 20-30°C during growing season
- **Rainfall**: Adequate water supply is crucial (varies by crop)
- **Humidity**: High humidity can promote fungal diseases
- **Sunlight**: 6-8 hours of direct sunlight daily is ideal

**Weather-based farming tips:**
- Monitor weather forecasts for irrigation planning
- Protect crops during extreme weather events
- Adjust planting schedules based on seasonal patterns
- Use weather data for pest and disease prediction

Would you like specific weather recommendations for a particular crop?"#;

pub const SOIL: &str = r#"**Soil Health & Management** 🌱

Healthy soil is the foundation of successful farming:

**Soil Testing:**
- Test pH levels (6.0-7.5 ideal for most crops)
- Check nutrient levels (N-P-K)
- Assess organic matter content
- Monitor soil texture and drainage

**Soil Improvement:**
- Add organic compost regularly
- Practice crop rotation
- Use cover crops to prevent erosion
- Avoid over-tillage

**Common Soil Issues:**
- **Acidic soil**: Add lime to raise pH
- **Alkaline soil**: Add sulfur or organic matter
- **Compacted soil**: Use deep tillage and add organic matter
- **Poor drainage**: Create raised beds or add sand

What specific soil concern do you have?"#;

pub const FERTILIZER_BODY: &str = r#"

**Essential Nutrients (NPK):**
- **Nitrogen (N)**: Promotes leaf growth and green color
- **Phosphorus (P)**: Supports root development and flowering
- **Potassium (K)**: Improves disease resistance and fruit quality

**Application Guidelines:**
- **Soil test first** to determine exact needs
- **Organic options**: Compost, manure, bone meal, kelp meal
- **Chemical fertilizers**: Use balanced ratios (10-10-10 for general use)
- **Timing**: Apply during active growing season
- **Method**: Work into soil, don't just surface apply

**Signs of Deficiency:**
- **Nitrogen**: Yellow leaves, stunted growth
- **Phosphorus**: Purple leaves, poor root development
- **Potassium**: Brown leaf edges, weak stems

Which specific nutrient concern do you have, or what crop are you fertilizing?"#;

pub const WATER_BODY: &str = r#"

**Optimal Watering Practices:**
- **Timing**: Early morning (6-10 AM) is best
- **Method**: Water at soil level to reduce disease
- **Frequency**: Deep, less frequent watering is better than shallow, frequent watering
- **Amount**: 1-2 inches per week for most crops

**Water Management by Crop Type:**
- **Leafy greens**: Light, frequent watering
- **Root vegetables**: Consistent moisture, avoid waterlogging
- **Fruit crops**: Deep watering, reduce before harvest

**Signs of Water Stress:**
- **Over-watering**: Yellow leaves, root rot, fungal growth
- **Under-watering**: Wilting, dry soil, stunted growth

**Water Conservation:**
- Use mulch to retain moisture
- Install drip irrigation systems
- Collect rainwater for irrigation
- Choose drought-resistant varieties

What's your specific watering challenge?"#;

pub const PEST_BODY: &str = r#"

**Integrated Pest Management (IPM) Approach:**

**1. Prevention:**
- Crop rotation to break pest cycles
- Companion planting (marigolds, basil, mint)
- Healthy soil creates strong, resistant plants
- Regular inspection for early detection

**2. Biological Control:**
- Encourage beneficial insects (ladybugs, lacewings)
- Use beneficial nematodes for soil pests
- Install bird houses for natural predation

**3. Organic Treatments:**
- **Neem oil**: Effective against aphids, mites, whiteflies
- **Diatomaceous earth**: Controls crawling insects
- **Soap spray**: Mix 1 tbsp dish soap per quart water
- **Bt (Bacillus thuringiensis)**: For caterpillars

**4. Chemical Control (last resort):**
- Use only when threshold levels are reached
- Rotate different modes of action
- Follow label instructions carefully
- Apply during calm weather conditions

**Common Pests & Solutions:**
- **Aphids**: Soap spray, ladybugs, neem oil
- **Caterpillars**: Bt spray, hand picking
- **Spider mites**: Increase humidity, predatory mites

What specific pest are you dealing with?"#;

pub const HARVEST: &str = r#"**Harvest & Post-Harvest Management** 📦

**Harvest Timing Indicators:**
- **Fruits**: Color change, slight softness, easy separation from stem
- **Vegetables**: Size, color, firmness specific to variety
- **Grains**: Moisture content, color change, test harvest small area

**Harvest Best Practices:**
- **Time of day**: Early morning when temperatures are cool
- **Tools**: Use clean, sharp tools to prevent disease transmission
- **Handling**: Gentle handling to prevent bruising
- **Containers**: Use clean, ventilated containers

**Post-Harvest Storage:**
- **Temperature control**: Most produce requires cool temperatures
- **Humidity**: Optimal levels vary by crop type
- **Ventilation**: Prevent moisture buildup and ethylene accumulation
- **Separation**: Keep ethylene producers away from sensitive crops

**Storage Methods:**
- **Short-term**: Refrigeration, proper containers
- **Long-term**: Freezing, drying, canning, fermentation
- **Root cellars**: For root vegetables and some fruits

**Quality Maintenance:**
- Handle minimally to reduce damage
- Sort and remove damaged items
- Monitor storage conditions regularly

What crop are you planning to harvest?"#;

pub const ORGANIC: &str = r#"**Organic Farming Practices** 🌿

**Core Principles:**
- Soil health through organic matter
- Biodiversity and ecosystem balance
- Natural pest and disease management
- No synthetic chemicals or GMOs

**Soil Building:**
- Compost and aged manure
- Cover crops and green manures
- Minimal tillage practices
- Crop rotation for nutrient cycling

**Natural Pest Control:**
- Beneficial insect habitats
- Companion planting strategies
- Physical barriers and traps
- Organic-approved sprays (neem, soap, Bt)

**Disease Prevention:**
- Disease-resistant varieties
- Proper plant spacing for air circulation
- Crop rotation to break disease cycles
- Organic fungicides (copper, sulfur)

**Certification Requirements:**
- 3-year transition period from conventional
- Detailed record keeping
- Annual inspections
- Approved input materials only

**Benefits:**
- Improved soil health over time
- Reduced environmental impact
- Premium market prices
- Enhanced biodiversity

Would you like specific guidance on transitioning to organic methods?"#;

pub const ROTATION: &str = r#"**Crop Rotation Benefits & Strategies** 🔄

**Why Rotate Crops:**
- Prevents soil nutrient depletion
- Breaks pest and disease cycles
- Improves soil structure
- Reduces weed pressure
- Increases biodiversity

**Basic Rotation Principles:**
- **4-year minimum** rotation cycle
- **Different plant families** in sequence
- **Heavy feeders → Light feeders → Soil builders**
- Avoid planting same family in consecutive years

**Crop Categories:**
- **Heavy feeders**: Tomatoes, corn, cabbage, squash
- **Light feeders**: Herbs, lettuce, onions, carrots
- **Soil builders**: Legumes (beans, peas, clover)

**Sample 4-Year Rotation:**
1. **Year 1**: Heavy feeders (tomatoes, peppers, corn)
2. **Year 2**: Legumes (beans, peas) - fix nitrogen
3. **Year 3**: Root crops (carrots, beets, radishes)
4. **Year 4**: Brassicas (cabbage, broccoli, kale)

**Planning Tips:**
- Map your garden/fields by zones
- Keep detailed records of what was planted where
- Consider companion planting within rotation
- Plan for cover crops during off-season

Do you need help planning a rotation for specific crops?"#;

pub const MARKET: &str = r#"**Agricultural Economics & Marketing** 💰

**Market Research:**
- Study local demand and pricing trends
- Identify high-value crop opportunities
- Consider processing and value-addition
- Explore direct-to-consumer sales

**Cost Analysis:**
- Calculate input costs (seeds, fertilizers, labor)
- Factor in equipment and infrastructure
- Include post-harvest and marketing costs
- Plan for crop insurance and risk management

**Marketing Strategies:**
- **Direct sales**: Farmers markets, CSA, farm stands
- **Wholesale**: Restaurants, grocery stores, distributors
- **Online sales**: E-commerce platforms, social media
- **Value-added products**: Processing, packaging, branding

**Profit Maximization:**
- Focus on high-value crops suitable for your region
- Reduce input costs through efficient practices
- Minimize post-harvest losses
- Build customer relationships for repeat business

**Record Keeping:**
- Track production costs and yields
- Monitor market prices and trends
- Document best practices and lessons learned
- Maintain financial records for tax purposes

What specific aspect of farm economics interests you?"#;

pub const TECHNOLOGY: &str = r#"**Modern Agricultural Technology** 🚀

**Precision Agriculture Tools:**
- **GPS guidance**: Accurate field operations, reduced overlap
- **Variable rate technology**: Optimize inputs based on field conditions
- **Yield mapping**: Track productivity across fields
- **Soil sampling**: Grid-based nutrient analysis

**Smart Monitoring Systems:**
- **Weather stations**: Real-time climate data
- **Soil sensors**: Moisture, temperature, pH monitoring
- **Plant health sensors**: Early stress detection
- **Irrigation automation**: Water management systems

**Drone Applications:**
- **Crop monitoring**: Health assessment, growth tracking
- **Spray applications**: Targeted pesticide/fertilizer delivery
- **Mapping**: Field boundaries, problem area identification
- **Livestock monitoring**: Herd health and location tracking

**Data Management:**
- **Farm management software**: Planning, record keeping, analysis
- **Mobile apps**: Field data collection, decision support
- **Cloud storage**: Access data anywhere, backup protection
- **Analytics**: Predictive modeling, optimization recommendations

**Benefits:**
- Increased efficiency and productivity
- Reduced input costs and environmental impact
- Better decision making with data insights
- Improved crop quality and yields

Which agricultural technology are you most interested in implementing?"#;

/// Fallback for messages no rule recognizes.
pub const CAPABILITIES: &str = r#"I understand you're asking about farming, but I need more specific information to provide the best help.

**I can assist you with:**
🌱 **Crop Diseases**: Identification, treatment, prevention
💧 **Water Management**: Irrigation, drainage, water conservation  
🌾 **Crop Guidance**: Planting, care, harvesting for rice, wheat, tomato
🐛 **Pest Control**: Organic and conventional pest management
🌿 **Soil Health**: Testing, fertilization, improvement methods
📈 **Farm Economics**: Marketing, profitability, cost analysis
🚀 **Technology**: Modern farming tools and techniques

**Please try asking:**
- "How do I treat tomato blight?"
- "When should I water my crops?"
- "What fertilizer is best for wheat?"
- "How do I control aphids naturally?"
- "Tell me about crop rotation"

What specific farming challenge can I help you solve today?"#;
