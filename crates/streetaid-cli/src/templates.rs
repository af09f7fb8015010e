//! Built-in page templates, registered into the document before a
//! controller runs.
//!
//! Sanitized CMS fields interpolate raw (`{{{…}}}`); everything else is
//! escaped by the renderer.

use streetaid_pages::{accommodation, category};
use streetaid_render::Document;

const ACCOMMODATION_TEMPLATE: &str = r#"<article class="accommodation">
  <h1>{{name}}</h1>
  <p class="address">{{address.formattedAddress}}</p>
  <section class="general-info">
    {{{generalInfo.synopsis}}}
    {{{generalInfo.description}}}
  </section>
  {{#features.hasContent}}
  <section class="features">
    <h2>Features</h2>
    <ul>
      {{#features.acceptsPets}}<li>Accepts pets</li>{{/features.acceptsPets}}
      {{#features.hasDisabledAccess}}<li>Disabled access</li>{{/features.hasDisabledAccess}}
      {{#features.hasSingleRooms}}<li>Single rooms</li>{{/features.hasSingleRooms}}
      {{#features.hasSharedRooms}}<li>Shared rooms</li>{{/features.hasSharedRooms}}
      {{#features.hasShowerBathroomFacilities}}<li>Shower and bathroom facilities</li>{{/features.hasShowerBathroomFacilities}}
      {{#features.hasAccessToKitchen}}<li>Kitchen access</li>{{/features.hasAccessToKitchen}}
      {{#features.hasFlexibleMealTimes}}<li>Flexible meal times</li>{{/features.hasFlexibleMealTimes}}
      {{#features.hasLounge}}<li>Lounge</li>{{/features.hasLounge}}
      {{#features.hasLaundryFacilities}}<li>Laundry facilities</li>{{/features.hasLaundryFacilities}}
      {{#features.providesCleanBedding}}<li>Clean bedding provided</li>{{/features.providesCleanBedding}}
      {{#features.allowsVisitors}}<li>Visitors welcome</li>{{/features.allowsVisitors}}
    </ul>
    {{{features.additionalFeatures}}}
  </section>
  {{/features.hasContent}}
  {{#pricingAndRequirements.hasContent}}
  <section class="pricing">
    <h2>Pricing and requirements</h2>
    {{#pricingAndRequirements.foodIsIncluded}}<p>Food is included.</p>{{/pricingAndRequirements.foodIsIncluded}}
    {{{pricingAndRequirements.availabilityOfMeals}}}
    {{{pricingAndRequirements.featuresAvailableAtAdditionalCost}}}
    {{{pricingAndRequirements.referralNotes}}}
  </section>
  {{/pricingAndRequirements.hasContent}}
  {{#supportProvided.hasContent}}
  <section class="support">
    <h2>Support provided</h2>
    <ul>
      {{#supportProvided.supportOffered}}<li>{{.}}</li>{{/supportProvided.supportOffered}}
    </ul>
    {{#supportProvided.hasOnSiteManager}}<p>A manager is on site.</p>{{/supportProvided.hasOnSiteManager}}
    {{{supportProvided.supportInfo}}}
  </section>
  {{/supportProvided.hasContent}}
  {{#residentCriteria.hasContent}}
  <section class="criteria">
    <h2>Who can stay</h2>
    <ul>
      {{#residentCriteria.acceptsMen}}<li>Men</li>{{/residentCriteria.acceptsMen}}
      {{#residentCriteria.acceptsWomen}}<li>Women</li>{{/residentCriteria.acceptsWomen}}
      {{#residentCriteria.acceptsCouples}}<li>Couples</li>{{/residentCriteria.acceptsCouples}}
      {{#residentCriteria.acceptsYoungPeople}}<li>Young people</li>{{/residentCriteria.acceptsYoungPeople}}
    </ul>
  </section>
  {{/residentCriteria.hasContent}}
  <section class="contact">
    <h2>Contact</h2>
    {{#contactInformation.telephone}}<p>Call {{contactInformation.telephone}}</p>{{/contactInformation.telephone}}
    {{#contactInformation.email}}<p>Email {{contactInformation.email}}</p>{{/contactInformation.email}}
    {{{contactInformation.additionalInfo}}}
  </section>
  <div class="js-map"></div>
</article>
"#;

const CATEGORY_RESULTS_TEMPLATE: &str = r#"<div class="category-results">
  {{#organisations.daysServices}}
  <section class="day">
    <h2>{{name}}</h2>
    <ul class="providers">
      {{#serviceProviders}}
      <li class="provider">
        <h3>{{name}}</h3>
        <p class="times">{{openingTimes.startTime}} to {{openingTimes.endTime}}</p>
        {{{info}}}
      </li>
      {{/serviceProviders}}
    </ul>
  </section>
  {{/organisations.daysServices}}
</div>
"#;

const CATEGORY_NO_RESULTS_TEMPLATE: &str =
    r#"<p class="no-results">No services are listed in this category yet.</p>
"#;

/// Register the built-in templates and their output elements.
pub fn install(doc: &mut Document) {
    doc.insert_template(accommodation::TEMPLATE_ID, ACCOMMODATION_TEMPLATE);
    doc.insert_element(accommodation::OUTPUT_ID);

    doc.insert_template(category::RESULTS_TEMPLATE_ID, CATEGORY_RESULTS_TEMPLATE);
    doc.insert_template(category::NO_RESULTS_TEMPLATE_ID, CATEGORY_NO_RESULTS_TEMPLATE);
    doc.insert_element(category::OUTPUT_ID);
}
