//! Reference seed data for countries and states.
//!
//! Fresh databases start empty; [`apply`] loads the rows below once.
//! Existing data is left untouched so locally edited reference tables
//! survive application upgrades.

use anyhow::Result;
use log::info;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::entities::{country, country_state};

#[rustfmt::skip]
const COUNTRIES: &[(&str, &str)] = &[
    ("AE", "United Arab Emirates"),
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BD", "Bangladesh"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("BH", "Bahrain"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CZ", "Czechia"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("EG", "Egypt"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GR", "Greece"),
    ("HK", "Hong Kong"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JO", "Jordan"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KH", "Cambodia"),
    ("KR", "South Korea"),
    ("KW", "Kuwait"),
    ("LA", "Laos"),
    ("LB", "Lebanon"),
    ("LK", "Sri Lanka"),
    ("LU", "Luxembourg"),
    ("MM", "Myanmar"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("NG", "Nigeria"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NP", "Nepal"),
    ("NZ", "New Zealand"),
    ("OM", "Oman"),
    ("PE", "Peru"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("QA", "Qatar"),
    ("RO", "Romania"),
    ("RU", "Russia"),
    ("SA", "Saudi Arabia"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SK", "Slovakia"),
    ("TH", "Thailand"),
    ("TR", "Turkey"),
    ("TW", "Taiwan"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("VN", "Vietnam"),
    ("ZA", "South Africa"),
];

#[rustfmt::skip]
const STATES: &[(&str, &str, &str)] = &[
    // United States
    ("US", "AL", "Alabama"),
    ("US", "AK", "Alaska"),
    ("US", "AZ", "Arizona"),
    ("US", "AR", "Arkansas"),
    ("US", "CA", "California"),
    ("US", "CO", "Colorado"),
    ("US", "CT", "Connecticut"),
    ("US", "DE", "Delaware"),
    ("US", "FL", "Florida"),
    ("US", "GA", "Georgia"),
    ("US", "HI", "Hawaii"),
    ("US", "ID", "Idaho"),
    ("US", "IL", "Illinois"),
    ("US", "IN", "Indiana"),
    ("US", "IA", "Iowa"),
    ("US", "KS", "Kansas"),
    ("US", "KY", "Kentucky"),
    ("US", "LA", "Louisiana"),
    ("US", "ME", "Maine"),
    ("US", "MD", "Maryland"),
    ("US", "MA", "Massachusetts"),
    ("US", "MI", "Michigan"),
    ("US", "MN", "Minnesota"),
    ("US", "MS", "Mississippi"),
    ("US", "MO", "Missouri"),
    ("US", "MT", "Montana"),
    ("US", "NE", "Nebraska"),
    ("US", "NV", "Nevada"),
    ("US", "NH", "New Hampshire"),
    ("US", "NJ", "New Jersey"),
    ("US", "NM", "New Mexico"),
    ("US", "NY", "New York"),
    ("US", "NC", "North Carolina"),
    ("US", "ND", "North Dakota"),
    ("US", "OH", "Ohio"),
    ("US", "OK", "Oklahoma"),
    ("US", "OR", "Oregon"),
    ("US", "PA", "Pennsylvania"),
    ("US", "RI", "Rhode Island"),
    ("US", "SC", "South Carolina"),
    ("US", "SD", "South Dakota"),
    ("US", "TN", "Tennessee"),
    ("US", "TX", "Texas"),
    ("US", "UT", "Utah"),
    ("US", "VT", "Vermont"),
    ("US", "VA", "Virginia"),
    ("US", "WA", "Washington"),
    ("US", "WV", "West Virginia"),
    ("US", "WI", "Wisconsin"),
    ("US", "WY", "Wyoming"),
    // Canada
    ("CA", "AB", "Alberta"),
    ("CA", "BC", "British Columbia"),
    ("CA", "MB", "Manitoba"),
    ("CA", "NB", "New Brunswick"),
    ("CA", "NL", "Newfoundland and Labrador"),
    ("CA", "NS", "Nova Scotia"),
    ("CA", "NT", "Northwest Territories"),
    ("CA", "NU", "Nunavut"),
    ("CA", "ON", "Ontario"),
    ("CA", "PE", "Prince Edward Island"),
    ("CA", "QC", "Quebec"),
    ("CA", "SK", "Saskatchewan"),
    ("CA", "YT", "Yukon"),
    // Australia
    ("AU", "ACT", "Australian Capital Territory"),
    ("AU", "NSW", "New South Wales"),
    ("AU", "NT", "Northern Territory"),
    ("AU", "QLD", "Queensland"),
    ("AU", "SA", "South Australia"),
    ("AU", "TAS", "Tasmania"),
    ("AU", "VIC", "Victoria"),
    ("AU", "WA", "Western Australia"),
    // India
    ("IN", "AP", "Andhra Pradesh"),
    ("IN", "AR", "Arunachal Pradesh"),
    ("IN", "AS", "Assam"),
    ("IN", "BR", "Bihar"),
    ("IN", "CG", "Chhattisgarh"),
    ("IN", "DL", "Delhi"),
    ("IN", "GA", "Goa"),
    ("IN", "GJ", "Gujarat"),
    ("IN", "HR", "Haryana"),
    ("IN", "HP", "Himachal Pradesh"),
    ("IN", "JH", "Jharkhand"),
    ("IN", "KA", "Karnataka"),
    ("IN", "KL", "Kerala"),
    ("IN", "MP", "Madhya Pradesh"),
    ("IN", "MH", "Maharashtra"),
    ("IN", "MN", "Manipur"),
    ("IN", "ML", "Meghalaya"),
    ("IN", "MZ", "Mizoram"),
    ("IN", "NL", "Nagaland"),
    ("IN", "OD", "Odisha"),
    ("IN", "PB", "Punjab"),
    ("IN", "RJ", "Rajasthan"),
    ("IN", "SK", "Sikkim"),
    ("IN", "TN", "Tamil Nadu"),
    ("IN", "TG", "Telangana"),
    ("IN", "TR", "Tripura"),
    ("IN", "UP", "Uttar Pradesh"),
    ("IN", "UK", "Uttarakhand"),
    ("IN", "WB", "West Bengal"),
    // Germany
    ("DE", "BW", "Baden-Württemberg"),
    ("DE", "BY", "Bavaria"),
    ("DE", "BE", "Berlin"),
    ("DE", "BB", "Brandenburg"),
    ("DE", "HB", "Bremen"),
    ("DE", "HH", "Hamburg"),
    ("DE", "HE", "Hesse"),
    ("DE", "MV", "Mecklenburg-Vorpommern"),
    ("DE", "NI", "Lower Saxony"),
    ("DE", "NW", "North Rhine-Westphalia"),
    ("DE", "RP", "Rhineland-Palatinate"),
    ("DE", "SL", "Saarland"),
    ("DE", "SN", "Saxony"),
    ("DE", "ST", "Saxony-Anhalt"),
    ("DE", "SH", "Schleswig-Holstein"),
    ("DE", "TH", "Thuringia"),
];

/// Load the reference rows into an empty database.
///
/// Databases that already hold countries are left as they are.
pub async fn apply(conn: &DatabaseConnection) -> Result<()> {
    let existing = country::Entity::find().count(conn).await?;
    if existing > 0 {
        info!("Reference data already present ({} countries), skipping seed", existing);
        return Ok(());
    }

    let countries = COUNTRIES.iter().map(|(code, name)| country::ActiveModel {
        code: ActiveValue::Set((*code).to_string()),
        name: ActiveValue::Set((*name).to_string()),
        ..Default::default()
    });
    country::Entity::insert_many(countries).exec(conn).await?;

    let states = STATES.iter().map(|(country_code, code, name)| country_state::ActiveModel {
        country_code: ActiveValue::Set((*country_code).to_string()),
        code: ActiveValue::Set((*code).to_string()),
        name: ActiveValue::Set((*name).to_string()),
        ..Default::default()
    });
    country_state::Entity::insert_many(states).exec(conn).await?;

    info!("Seeded {} countries and {} states", COUNTRIES.len(), STATES.len());
    Ok(())
}
